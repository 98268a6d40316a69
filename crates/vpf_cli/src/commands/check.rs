//! Check command implementation
//!
//! Validates the configuration and prints the effective settings.

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let seed = config
        .estimator
        .seed
        .map_or_else(|| "entropy".to_string(), |s| s.to_string());

    println!("Configuration OK");
    println!("  log_level: {}", config.log_level);
    println!("  estimator.trials: {}", config.estimator.trials);
    println!("  estimator.seed: {}", seed);
    println!("  estimator.parallel: {}", config.estimator.parallel);
    println!("  output.format: {}", config.output.format);
    println!("  available threads: {}", available_threads());

    info!("Configuration check passed");
    Ok(())
}

fn available_threads() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_default_config() {
        assert!(run(&CliConfig::default()).is_ok());
    }

    #[test]
    fn test_check_rejects_invalid() {
        let mut config = CliConfig::default();
        config.estimator.trials = 0;
        assert!(run(&config).is_err());
    }
}
