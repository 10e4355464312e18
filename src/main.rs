//! uzconvert - Uzbek Cyrillic/Latin text converter

use std::io::Read;

use clap::Parser;

use uzconvert::config::{load_config, save_config};
use uzconvert::core::converter::{convert, ConversionMode};
use uzconvert::detection::{detect_script, Script};

#[derive(Parser)]
#[command(name = "uzconvert", version, about = "Uzbek Cyrillic/Latin text converter")]
struct Cli {
    /// Text to convert; read from stdin when omitted
    text: Option<String>,

    /// Conversion mode (cyrillic-to-latin, latin-to-cyrillic, uppercase,
    /// lowercase, title-case, sentence-case, reverse, binary, hex, base64)
    #[arg(short, long)]
    mode: Option<String>,

    /// Print the detected script of the input and exit
    #[arg(long)]
    detect: bool,

    /// List available modes and exit
    #[arg(long)]
    list_modes: bool,

    /// Persist --mode as the default conversion mode (turning off
    /// auto-detection) and exit
    #[arg(long, requires = "mode")]
    save_default: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.list_modes {
        for mode in ConversionMode::ALL {
            println!("{:<18} {}", mode.name(), mode.label());
        }
        return;
    }

    if cli.save_default {
        // clap enforces that --mode is present
        let Some(name) = cli.mode.as_deref() else {
            log::error!("--save-default requires --mode");
            std::process::exit(1);
        };
        let mode = match name.parse::<ConversionMode>() {
            Ok(mode) => mode,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        };
        let mut config = load_config();
        config.default_mode = mode;
        config.auto_detect = false;
        if let Err(e) = save_config(&config) {
            log::error!("failed to save config: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                log::error!("failed to read stdin: {}", e);
                std::process::exit(1);
            }
            buf
        }
    };

    if cli.detect {
        println!("{}", detect_script(&text));
        return;
    }

    let mode = match cli.mode {
        Some(name) => match name.parse::<ConversionMode>() {
            Ok(mode) => mode,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => {
            let config = load_config();
            if config.auto_detect {
                match detect_script(&text) {
                    Script::Cyrillic => ConversionMode::CyrillicToLatin,
                    Script::Latin => ConversionMode::LatinToCyrillic,
                }
            } else {
                config.default_mode
            }
        }
    };

    println!("{}", convert(&text, mode));
}
