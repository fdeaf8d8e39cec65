use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                info(format!("Configuration file: {}", path.display()));
                ConfigLogic::print(&path)?;
            } else {
                warning("No configuration file yet, showing defaults (run `shiftboard init`).");
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }

        if *edit_config {
            if !path.exists() {
                cfg.save_to(&path)?;
            }
            ConfigLogic::edit(&path, editor)?;
            success("Configuration file edited successfully");
        }
    }

    Ok(())
}
