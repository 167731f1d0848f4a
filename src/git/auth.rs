//! Git authentication
//!
//! Credentials come from git's own sources only: default credentials, the SSH
//! agent, keys in `~/.ssh/`, and configured credential helpers. Anonymous
//! user/password is the last resort so public HTTPS remotes still answer with
//! their real error.

use git2::{Cred, CredentialType, Error, ErrorClass, ErrorCode, RemoteCallbacks};

const SSH_KEY_NAMES: [&str; 3] = ["id_ed25519", "id_rsa", "id_ecdsa"];

fn auth_error(message: &str) -> Error {
    Error::new(ErrorCode::Auth, ErrorClass::Http, message)
}

fn ssh_key_from_home(username: &str) -> Result<Cred, Error> {
    let ssh_dir = dirs::home_dir().unwrap_or_default().join(".ssh");

    SSH_KEY_NAMES
        .iter()
        .map(|name| (ssh_dir.join(name), ssh_dir.join(format!("{name}.pub"))))
        .filter(|(private_key, _)| private_key.exists())
        .find_map(|(private_key, public_key)| {
            let public_key = public_key.exists().then_some(public_key);
            Cred::ssh_key(username, public_key.as_deref(), &private_key, None).ok()
        })
        .ok_or_else(|| auth_error("SSH key not found"))
}

fn anonymous(username_from_url: Option<&str>) -> Result<Cred, Error> {
    [Some(""), username_from_url, Some("git"), Some("anonymous")]
        .into_iter()
        .flatten()
        .find_map(|username| Cred::userpass_plaintext(username, "").ok())
        .ok_or_else(|| auth_error("authentication failed"))
}

fn user_pass(url: &str, username_from_url: Option<&str>) -> Result<Cred, Error> {
    let config = git2::Config::open_default().or_else(|_| git2::Config::new())?;
    Cred::credential_helper(&config, url, username_from_url)
        .or_else(|_| anonymous(username_from_url))
}

/// Install the credential callback on `callbacks`
pub fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks) {
    callbacks.credentials(|url, username_from_url, allowed_types| {
        if allowed_types.contains(CredentialType::DEFAULT) {
            return Cred::default();
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            return match username_from_url {
                Some(username) => {
                    Cred::ssh_key_from_agent(username).or_else(|_| ssh_key_from_home(username))
                }
                None => anonymous(None),
            };
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            return user_pass(url, username_from_url);
        }

        Err(auth_error("no supported credential type"))
    });
}
