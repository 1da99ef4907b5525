use clap::Args;
use serde::Serialize;
use stylist_store::{FavoritesRepository, JsonFileFavoritesRepository};

use crate::commands::{load_local_config, runtime, CommandResult, EXIT_PERSISTENCE};

const COMMAND: &str = "favorites";

#[derive(Debug, Clone, Default, Args)]
pub struct FavoritesArgs {
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FavoritesPayload<'a> {
    command: &'static str,
    status: &'static str,
    path: String,
    favorites: &'a [String],
}

pub fn run(args: FavoritesArgs) -> CommandResult {
    let config = match load_local_config(COMMAND) {
        Ok(config) => config,
        Err(failure) => return failure,
    };
    let runtime = match runtime(COMMAND) {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    let repository = JsonFileFavoritesRepository::new(&config.favorites.path);
    let favorites = match runtime.block_on(repository.list()) {
        Ok(favorites) => favorites,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "persistence",
                format!("could not read favorites: {error}"),
                EXIT_PERSISTENCE,
            );
        }
    };

    if args.json {
        let payload = FavoritesPayload {
            command: COMMAND,
            status: "ok",
            path: repository.path().display().to_string(),
            favorites: &favorites,
        };
        return match serde_json::to_string_pretty(&payload) {
            Ok(output) => CommandResult::text(output),
            Err(error) => CommandResult::failure(COMMAND, "serialization", error.to_string(), 1),
        };
    }

    CommandResult::text(render_list(&favorites))
}

fn render_list(favorites: &[String]) -> String {
    if favorites.is_empty() {
        return "No favorite outfits saved yet.".to_string();
    }

    let mut lines = vec![format!("Saved outfits ({}):", favorites.len())];
    for (index, favorite) in favorites.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {favorite}", index + 1));
    }
    lines.join("\n")
}
