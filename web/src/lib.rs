use clap::Parser;
use wasm_bindgen::prelude::*;

mod compass;
mod game;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

/// Reads `#-v&--quiet` style flags. Unrecognised input falls back to the
/// defaults and hands back the parse error for logging.
fn args_from_hash(hash: &str) -> (Args, Option<clap::Error>) {
    match Args::try_parse_from(hash.split(['#', '&'])) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, rejected) = args_from_hash(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = rejected {
        log::warn!("Ignoring location hash {:?}: {:?}", location_hash, err.kind());
    }

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root(root).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn verbosity_flags_come_from_the_hash() {
        let (args, rejected) = args_from_hash("#-vv");
        assert!(rejected.is_none());
        assert_eq!(args.verbose.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn unknown_hash_falls_back_to_defaults() {
        let default = Args::parse_from([""]).verbose.log_level_filter();

        for hash in ["#foo", "#--bogus&-v"] {
            let (args, rejected) = args_from_hash(hash);
            assert!(rejected.is_some(), "{hash} should be rejected");
            assert_eq!(args.verbose.log_level_filter(), default);
        }
        let (args, rejected) = args_from_hash("");
        assert!(rejected.is_none());
        assert_eq!(args.verbose.log_level_filter(), default);
    }

    #[test]
    fn host_page_provides_mount_point() {
        let page = include_str!("../index.html");
        assert!(page.contains(r#"id="game""#));
        assert!(page.contains("--bearing"));
    }
}
