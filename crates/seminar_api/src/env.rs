use mkenv::{error::ConfigInitError, prelude::*};
use once_cell::sync::OnceCell;
use seminar_lib::DbEnv;

#[cfg(not(debug_assertions))]
mkenv::make_config! {
    pub struct SessionKeyEnv {
        pub sess_key: {
            var_name: "SEMINAR_API_SESSION_KEY_FILE",
            layers: [file_read()],
            description: "The path to the file containing the session key used by the API (at least 64 bytes)",
        },
    }
}

#[cfg(debug_assertions)]
mkenv::make_config! {
    pub struct SessionKeyEnv {
        pub sess_key: {
            var_name: "SEMINAR_API_SESSION_KEY",
            layers: [or_default()],
            description: "The session key used by the API (at least 64 bytes). A random key is generated if empty",
            default_val_fmt: "empty",
        },
    }
}

#[cfg(debug_assertions)]
mkenv::make_config! {
    pub struct Hostname {}
}

#[cfg(not(debug_assertions))]
mkenv::make_config! {
    pub struct Hostname {
        pub host: {
            var_name: "SEMINAR_API_HOST",
            description: "The origin of the website using the API (e.g. https://seminars.example.com)",
        }
    }
}

mkenv::make_config! {
    pub struct ApiEnv {
        pub db_env: { DbEnv },

        pub sess_key: { SessionKeyEnv },

        pub port: {
            var_name: "SEMINAR_API_PORT",
            layers: [
                parsed_from_str<u16>(),
                or_default_val(|| 3000),
            ],
            description: "The port used to expose the API",
            default_val_fmt: "3000",
        },

        pub host: { Hostname },

        pub session_ttl: {
            var_name: "SEMINAR_API_SESSION_TTL",
            layers: [
                parsed_from_str<u32>(),
                or_default_val(|| 7 * 24 * 3600),
            ],
            description: "The TTL (time-to-live) of a user session (in seconds)",
            default_val_fmt: "7 days",
        },
    }
}

static ENV: OnceCell<ApiEnv> = OnceCell::new();

/// Reads the environment of the API, and stores it as global.
///
/// Subsequent calls return the environment read the first time.
pub fn init_env() -> anyhow::Result<&'static ApiEnv> {
    fn map_err(err: ConfigInitError<'_>) -> anyhow::Error {
        anyhow::anyhow!("{err}")
    }

    ENV.get_or_try_init(|| {
        let env = ApiEnv::define();
        env.try_init().map_err(map_err)?;
        Ok(env)
    })
}

