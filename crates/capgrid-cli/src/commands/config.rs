use std::path::Path;

use capgrid_core::CapgridConfig;
use tracing::debug;

/// Load `capgrid.toml` from `path`, or the defaults when none is given.
pub fn load(path: Option<&str>) -> anyhow::Result<CapgridConfig> {
    match path {
        Some(p) => {
            debug!(path = p, "loading config");
            Ok(CapgridConfig::from_file(Path::new(p))?)
        }
        None => Ok(CapgridConfig::default()),
    }
}

pub fn init(path: &str) -> anyhow::Result<()> {
    let output = Path::new(path);
    if output.exists() {
        anyhow::bail!("{} already exists", output.display());
    }

    let config = CapgridConfig::scaffold(42);
    std::fs::write(output, config.to_toml_string()?)?;
    println!("✓ Generated {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_loadable_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capgrid.toml");
        let path = path.to_str().unwrap();

        init(path).unwrap();
        let loaded = load(Some(path)).unwrap();
        assert_eq!(loaded, CapgridConfig::scaffold(42));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capgrid.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(init(path.to_str().unwrap()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn missing_path_means_defaults() {
        assert_eq!(load(None).unwrap(), CapgridConfig::default());
    }
}
