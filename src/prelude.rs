pub use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use anyhow::{anyhow, Context};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{error, info, warn};
pub use serde::{de::DeserializeOwned, Deserialize, Serialize};
