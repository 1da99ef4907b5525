//! Literal outfit catalog.
//!
//! Casual outfits cover every named color; the other occasions only carry
//! `blue` and `default`, so any other color resolves to that occasion's
//! `default` subtree.

use super::CatalogRow;
use crate::domain::{Color, ColorKey, Gender, Mood, Occasion};

const fn row(
    occasion: Occasion,
    gender: Gender,
    color: ColorKey,
    mood: Mood,
    items: &'static str,
    description: &'static str,
) -> CatalogRow {
    CatalogRow { occasion, gender, color, mood, items, description }
}

pub(super) const SEED_ROWS: &[CatalogRow; 126] = &[
    // casual
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Blue), Mood::Bold,
        "Blue leather jacket, black jeans, sneakers",
        "This bold blue look screams confidence with a sleek leather jacket, perfect for a night out."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Blue chinos, white tee, loafers",
        "A clean, minimalist blue outfit that’s effortlessly stylish for any casual day."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Blue hoodie, gray joggers, slip-ons",
        "Stay comfy yet cool with this cozy blue hoodie ensemble, ideal for lounging or errands."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Red), Mood::Bold,
        "Red bomber jacket, black pants, boots",
        "Make a statement with this vibrant red bomber jacket."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Red), Mood::Minimal,
        "Red shirt, khaki shorts, sneakers",
        "Casual and cool red look."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Red), Mood::Cozy,
        "Red sweatshirt, black joggers, slippers",
        "Warm and relaxed red outfit."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Black), Mood::Bold,
        "Black denim jacket, gray tee, combat boots",
        "Edgy black denim vibe."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Black), Mood::Minimal,
        "Black jeans, white shirt, sneakers",
        "Simple black and white classic."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Black), Mood::Cozy,
        "Black hoodie, sweatpants, slippers",
        "Ultimate black comfort."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::White), Mood::Bold,
        "White graphic tee, cargo pants, high-tops",
        "Bold white street style."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::White), Mood::Minimal,
        "White linen shirt, beige shorts, loafers",
        "Crisp white summer look."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::White), Mood::Cozy,
        "White sweater, gray sweats, sneakers",
        "Cozy white warmth."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Green), Mood::Bold,
        "Green parka, black jeans, boots",
        "Rugged green adventure style."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Green), Mood::Minimal,
        "Green polo, khaki pants, sneakers",
        "Fresh green casual."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Green), Mood::Cozy,
        "Green hoodie, joggers, slip-ons",
        "Relaxed green comfort."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Yellow), Mood::Bold,
        "Yellow jacket, black shorts, sneakers",
        "Bright yellow energy."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Yellow), Mood::Minimal,
        "Yellow tee, denim jeans, loafers",
        "Sunny yellow simplicity."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Yellow), Mood::Cozy,
        "Yellow sweatshirt, gray pants, sneakers",
        "Warm yellow coziness."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Purple), Mood::Bold,
        "Purple blazer, black tee, jeans",
        "Vibrant purple flair."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Purple), Mood::Minimal,
        "Purple shirt, gray shorts, sneakers",
        "Subtle purple charm."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Purple), Mood::Cozy,
        "Purple hoodie, black joggers, slippers",
        "Cozy purple retreat."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Orange), Mood::Bold,
        "Orange windbreaker, black pants, boots",
        "Bold orange adventure."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Orange), Mood::Minimal,
        "Orange tee, khaki shorts, sneakers",
        "Playful orange casual."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Orange), Mood::Cozy,
        "Orange sweater, joggers, slip-ons",
        "Warm orange comfort."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Pink), Mood::Bold,
        "Pink jacket, white tee, jeans",
        "Striking pink confidence."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Pink), Mood::Minimal,
        "Pink shirt, beige pants, loafers",
        "Soft pink elegance."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Pink), Mood::Cozy,
        "Pink hoodie, gray sweats, sneakers",
        "Cozy pink vibes."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Gray), Mood::Bold,
        "Gray graphic tee, black cargo pants, sneakers",
        "Urban gray edge."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Gray), Mood::Minimal,
        "Gray polo, denim jeans, oxfords",
        "Classic gray polish."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Gray), Mood::Cozy,
        "Gray sweatshirt, joggers, slippers",
        "Relaxed gray comfort."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Navy), Mood::Bold,
        "Navy bomber jacket, black jeans, boots",
        "Sleek navy cool."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Navy), Mood::Minimal,
        "Navy shirt, khaki chinos, sneakers",
        "Crisp navy casual."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Navy), Mood::Cozy,
        "Navy hoodie, gray joggers, slip-ons",
        "Cozy navy warmth."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Beige), Mood::Bold,
        "Beige jacket, black pants, sneakers",
        "Modern beige flair."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Beige), Mood::Minimal,
        "Beige tee, denim shorts, loafers",
        "Light beige ease."),
    row(Occasion::Casual, Gender::Male, ColorKey::Named(Color::Beige), Mood::Cozy,
        "Beige sweater, joggers, sneakers",
        "Warm beige comfort."),
    row(Occasion::Casual, Gender::Male, ColorKey::Default, Mood::Bold,
        "Gray tee, cargo pants, high-tops",
        "Versatile gray street style."),
    row(Occasion::Casual, Gender::Male, ColorKey::Default, Mood::Minimal,
        "Gray polo, jeans, oxfords",
        "Timeless gray simplicity."),
    row(Occasion::Casual, Gender::Male, ColorKey::Default, Mood::Cozy,
        "Gray sweatshirt, joggers, sneakers",
        "Ultimate gray coziness."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Blue), Mood::Bold,
        "Blue denim skirt, crop top, ankle boots",
        "This bold blue outfit radiates trendy vibes with a chic denim skirt, perfect for a stylish day out."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Blue midi dress, white sneakers",
        "A sleek blue midi dress for a minimalist, effortless look that shines anywhere."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Blue knit sweater, leggings, fuzzy boots",
        "Wrap yourself in cozy blue comfort with this soft sweater and fuzzy boots combo."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Red), Mood::Bold,
        "Red jumpsuit, black heels",
        "Fiery red jumpsuit for a bold statement."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Red), Mood::Minimal,
        "Red blouse, white jeans, flats",
        "Elegant red and white simplicity."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Red), Mood::Cozy,
        "Red cardigan, black leggings, slippers",
        "Cozy red warmth."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Black), Mood::Bold,
        "Black leather pants, graphic tee, boots",
        "Edgy black leather look."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Black), Mood::Minimal,
        "Black shift dress, ballet flats",
        "Classic black dress elegance."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Black), Mood::Cozy,
        "Black oversized sweater, joggers, sneakers",
        "Relaxed black comfort."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::White), Mood::Bold,
        "White blazer, ripped jeans, heels",
        "Chic white blazer style."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::White), Mood::Minimal,
        "White sundress, sandals",
        "Breezy white summer dress."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::White), Mood::Cozy,
        "White hoodie, sweatpants, fuzzy socks",
        "Cozy white lounge wear."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Green), Mood::Bold,
        "Green maxi skirt, crop top, sandals",
        "Vibrant green boho chic."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Green), Mood::Minimal,
        "Green blouse, beige pants, flats",
        "Fresh green elegance."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Green), Mood::Cozy,
        "Green sweater, leggings, boots",
        "Warm green coziness."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Yellow), Mood::Bold,
        "Yellow dress, statement necklace, heels",
        "Sunny yellow glamour."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Yellow), Mood::Minimal,
        "Yellow top, denim skirt, sneakers",
        "Playful yellow casual."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Yellow), Mood::Cozy,
        "Yellow hoodie, joggers, slippers",
        "Cozy yellow comfort."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Purple), Mood::Bold,
        "Purple jumpsuit, gold earrings, boots",
        "Regal purple flair."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Purple), Mood::Minimal,
        "Purple blouse, black jeans, flats",
        "Subtle purple charm."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Purple), Mood::Cozy,
        "Purple cardigan, leggings, sneakers",
        "Cozy purple retreat."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Orange), Mood::Bold,
        "Orange skirt, white top, heels",
        "Bold orange vibrancy."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Orange), Mood::Minimal,
        "Orange dress, sandals",
        "Bright orange simplicity."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Orange), Mood::Cozy,
        "Orange sweater, black joggers, boots",
        "Warm orange comfort."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Pink), Mood::Bold,
        "Pink blazer, black dress, heels",
        "Striking pink sophistication."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Pink), Mood::Minimal,
        "Pink top, white shorts, flats",
        "Soft pink casual."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Pink), Mood::Cozy,
        "Pink hoodie, gray leggings, slippers",
        "Cozy pink vibes."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Gray), Mood::Bold,
        "Gray jumpsuit, statement belt, boots",
        "Modern gray edge."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Gray), Mood::Minimal,
        "Gray blouse, black skirt, flats",
        "Classic gray polish."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Gray), Mood::Cozy,
        "Gray sweatshirt, leggings, sneakers",
        "Relaxed gray comfort."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Navy), Mood::Bold,
        "Navy dress, silver accessories, heels",
        "Elegant navy glamour."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Navy), Mood::Minimal,
        "Navy top, beige pants, sneakers",
        "Crisp navy casual."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Navy), Mood::Cozy,
        "Navy cardigan, black leggings, boots",
        "Cozy navy warmth."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Beige), Mood::Bold,
        "Beige trench coat, black dress, boots",
        "Sophisticated beige style."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Beige), Mood::Minimal,
        "Beige blouse, denim jeans, flats",
        "Light beige ease."),
    row(Occasion::Casual, Gender::Female, ColorKey::Named(Color::Beige), Mood::Cozy,
        "Beige hoodie, joggers, sneakers",
        "Warm beige comfort."),
    row(Occasion::Casual, Gender::Female, ColorKey::Default, Mood::Bold,
        "Gray jumpsuit, necklace, boots",
        "Versatile gray chic."),
    row(Occasion::Casual, Gender::Female, ColorKey::Default, Mood::Minimal,
        "Gray blouse, black jeans, flats",
        "Timeless gray simplicity."),
    row(Occasion::Casual, Gender::Female, ColorKey::Default, Mood::Cozy,
        "Gray sweatshirt, leggings, sneakers",
        "Ultimate gray coziness."),
    // formal
    row(Occasion::Formal, Gender::Male, ColorKey::Named(Color::Blue), Mood::Bold,
        "Navy suit, patterned blue tie, brogues",
        "Sharp navy suit for a bold formal presence."),
    row(Occasion::Formal, Gender::Male, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Navy suit, white shirt, no tie",
        "Clean navy suit elegance."),
    row(Occasion::Formal, Gender::Male, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Navy blazer, white shirt, wool scarf",
        "Warm navy formal style."),
    row(Occasion::Formal, Gender::Male, ColorKey::Default, Mood::Bold,
        "Gray suit, colorful tie, wingtips",
        "Classic gray suit flair."),
    row(Occasion::Formal, Gender::Male, ColorKey::Default, Mood::Minimal,
        "Gray suit, white shirt, black shoes",
        "Timeless gray suit."),
    row(Occasion::Formal, Gender::Male, ColorKey::Default, Mood::Cozy,
        "Gray suit, turtleneck, overcoat",
        "Cozy gray formal."),
    row(Occasion::Formal, Gender::Female, ColorKey::Named(Color::Blue), Mood::Bold,
        "Navy gown, statement earrings, heels",
        "Elegant navy gown for a stunning entrance."),
    row(Occasion::Formal, Gender::Female, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Navy pencil dress, nude pumps",
        "Sleek navy dress sophistication."),
    row(Occasion::Formal, Gender::Female, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Navy wrap dress, warm shawl",
        "Cozy navy elegance."),
    row(Occasion::Formal, Gender::Female, ColorKey::Default, Mood::Bold,
        "Gray gown, pearl necklace, heels",
        "Regal gray gown."),
    row(Occasion::Formal, Gender::Female, ColorKey::Default, Mood::Minimal,
        "Gray dress, black pumps",
        "Simple gray elegance."),
    row(Occasion::Formal, Gender::Female, ColorKey::Default, Mood::Cozy,
        "Gray blazer, turtleneck, trousers",
        "Warm gray formal."),
    // work
    row(Occasion::Work, Gender::Male, ColorKey::Named(Color::Blue), Mood::Bold,
        "Blue blazer, white shirt, khaki pants, loafers",
        "Professional blue blazer for a confident office look."),
    row(Occasion::Work, Gender::Male, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Blue dress shirt, gray slacks, oxfords",
        "Crisp blue shirt for a polished workday."),
    row(Occasion::Work, Gender::Male, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Blue sweater, chinos, boots",
        "Comfortable blue sweater for a relaxed office vibe."),
    row(Occasion::Work, Gender::Male, ColorKey::Default, Mood::Bold,
        "Gray blazer, white shirt, navy pants, loafers",
        "Sharp gray office style."),
    row(Occasion::Work, Gender::Male, ColorKey::Default, Mood::Minimal,
        "Gray shirt, black slacks, oxfords",
        "Simple gray work look."),
    row(Occasion::Work, Gender::Male, ColorKey::Default, Mood::Cozy,
        "Gray sweater, chinos, boots",
        "Cozy gray office comfort."),
    row(Occasion::Work, Gender::Female, ColorKey::Named(Color::Blue), Mood::Bold,
        "Blue pantsuit, white blouse, heels",
        "Powerful blue pantsuit for a commanding office presence."),
    row(Occasion::Work, Gender::Female, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Blue blouse, pencil skirt, flats",
        "Elegant blue blouse for a professional day."),
    row(Occasion::Work, Gender::Female, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Blue cardigan, trousers, boots",
        "Cozy blue cardigan for a comfortable workday."),
    row(Occasion::Work, Gender::Female, ColorKey::Default, Mood::Bold,
        "Gray blazer, white dress, heels",
        "Chic gray office style."),
    row(Occasion::Work, Gender::Female, ColorKey::Default, Mood::Minimal,
        "Gray blouse, black skirt, flats",
        "Simple gray work look."),
    row(Occasion::Work, Gender::Female, ColorKey::Default, Mood::Cozy,
        "Gray cardigan, trousers, boots",
        "Cozy gray office comfort."),
    // party
    row(Occasion::Party, Gender::Male, ColorKey::Named(Color::Blue), Mood::Bold,
        "Blue velvet blazer, black shirt, jeans, loafers",
        "Sleek blue velvet for a standout party vibe."),
    row(Occasion::Party, Gender::Male, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Blue shirt, black pants, sneakers",
        "Cool blue party casual."),
    row(Occasion::Party, Gender::Male, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Blue sweater, chinos, boots",
        "Relaxed blue party comfort."),
    row(Occasion::Party, Gender::Male, ColorKey::Default, Mood::Bold,
        "Gray blazer, black shirt, jeans, loafers",
        "Stylish gray party look."),
    row(Occasion::Party, Gender::Male, ColorKey::Default, Mood::Minimal,
        "Gray tee, black pants, sneakers",
        "Simple gray party style."),
    row(Occasion::Party, Gender::Male, ColorKey::Default, Mood::Cozy,
        "Gray hoodie, jeans, boots",
        "Cozy gray party vibe."),
    row(Occasion::Party, Gender::Female, ColorKey::Named(Color::Blue), Mood::Bold,
        "Blue sequin dress, heels",
        "Dazzling blue sequins to light up the party."),
    row(Occasion::Party, Gender::Female, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Blue top, black jeans, flats",
        "Chic blue party casual."),
    row(Occasion::Party, Gender::Female, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Blue sweater, skirt, boots",
        "Cozy blue party comfort."),
    row(Occasion::Party, Gender::Female, ColorKey::Default, Mood::Bold,
        "Gray party dress, heels",
        "Sparkling gray party glamour."),
    row(Occasion::Party, Gender::Female, ColorKey::Default, Mood::Minimal,
        "Gray top, black jeans, flats",
        "Simple gray party look."),
    row(Occasion::Party, Gender::Female, ColorKey::Default, Mood::Cozy,
        "Gray cardigan, jeans, boots",
        "Cozy gray party style."),
    // date_night
    row(Occasion::DateNight, Gender::Male, ColorKey::Named(Color::Blue), Mood::Bold,
        "Blue blazer, black shirt, jeans, loafers",
        "Suave blue blazer for a romantic evening."),
    row(Occasion::DateNight, Gender::Male, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Blue shirt, gray pants, sneakers",
        "Effortless blue date-night charm."),
    row(Occasion::DateNight, Gender::Male, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Blue sweater, chinos, boots",
        "Warm blue outfit for a cozy date."),
    row(Occasion::DateNight, Gender::Male, ColorKey::Default, Mood::Bold,
        "Gray blazer, black shirt, jeans, loafers",
        "Sleek gray date-night style."),
    row(Occasion::DateNight, Gender::Male, ColorKey::Default, Mood::Minimal,
        "Gray shirt, navy pants, sneakers",
        "Simple gray date look."),
    row(Occasion::DateNight, Gender::Male, ColorKey::Default, Mood::Cozy,
        "Gray sweater, jeans, boots",
        "Cozy gray date comfort."),
    row(Occasion::DateNight, Gender::Female, ColorKey::Named(Color::Blue), Mood::Bold,
        "Blue wrap dress, heels",
        "Elegant blue wrap dress for a stunning date night."),
    row(Occasion::DateNight, Gender::Female, ColorKey::Named(Color::Blue), Mood::Minimal,
        "Blue blouse, black jeans, flats",
        "Chic blue date-night casual."),
    row(Occasion::DateNight, Gender::Female, ColorKey::Named(Color::Blue), Mood::Cozy,
        "Blue sweater, skirt, boots",
        "Cozy blue outfit for a romantic evening."),
    row(Occasion::DateNight, Gender::Female, ColorKey::Default, Mood::Bold,
        "Gray dress, black heels",
        "Romantic gray date-night glamour."),
    row(Occasion::DateNight, Gender::Female, ColorKey::Default, Mood::Minimal,
        "Gray blouse, black jeans, flats",
        "Simple gray date look."),
    row(Occasion::DateNight, Gender::Female, ColorKey::Default, Mood::Cozy,
        "Gray cardigan, jeans, boots",
        "Cozy gray date comfort."),
];
