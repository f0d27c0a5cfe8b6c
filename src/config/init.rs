// ABOUTME: Config scaffolding for new workstations.
// ABOUTME: Creates envssh.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::CONFIG_FILENAME;

const TEMPLATE: &str = r#"# Login name for direct-IP environments. Overridden by --user.
# May also be read from the environment: { env: ENVSSH_USER, default: deploy }
ssh_user: deploy

# Checkouts holding ansible/ssh.cfg
setup_path: ~/src/dp-setup
ci_path: ~/src/dp-ci

environments:
  - name: sandbox
    profile: dp-sandbox
    user: ubuntu
    instances:
      - name: sandbox-web-1
        ip: 10.30.1.10
        id: i-0123456789abcdef0
        groups: [web]
        aliases: [frontend]
  - name: develop
    profile: development
    instances:
      - name: develop-web-1
        ip: 10.20.1.10
        id: i-0fedcba9876543210
        groups: [web]
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, TEMPLATE)?;
    tracing::debug!("wrote config template to {}", config_path.display());

    Ok(())
}
