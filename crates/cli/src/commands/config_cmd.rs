//! `wise config` — Configuration management commands.

use wise_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();

            if config.advisor.greeting.trim().is_empty() {
                warnings.push("advisor.greeting is empty; chats will open silently");
            }

            if config.storage.backend == "memory" {
                warnings.push("storage.backend = \"memory\": sessions are lost on exit");
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   History:   {} turns per session", config.advisor.history_limit);
            println!("   Storage:   {}", config.storage.backend);
            if config.storage.backend == "file" {
                println!("   Sessions:  {}", config.sessions_path().display());
            }
            println!("   Logging:   {}", config.logging.level);
            println!(
                "   Profile:   {}",
                if config.profile.is_some() { "configured" } else { "none" }
            );
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");
    println!("{}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn config_path_is_valid() {
        let path = wise_config::AppConfig::config_dir().join("config.toml");
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
