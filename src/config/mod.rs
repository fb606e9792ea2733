//! User preferences: the display currency and the local user id.
//!
//! Currency is read once and then passed explicitly into every formatting call;
//! nothing in the crate keeps it in global state.

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::Utc;
use serde::{de::Deserializer, Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{currency::Currency, errors::ExpenseError};

const DEFAULT_DIR_NAME: &str = ".expense_core";
const PREFERENCES_FILE: &str = "preferences.json";
const TMP_SUFFIX: &str = "tmp";
pub const HOME_ENV: &str = "EXPENSE_CORE_HOME";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default, deserialize_with = "lenient_currency")]
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Unknown or malformed currency values fall back to the default.
fn lenient_currency<'de, D>(deserializer: D) -> Result<Currency, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|value| value.parse::<Currency>().ok());
    if parsed.is_none() {
        warn!(value = ?raw, "unreadable currency preference, using default");
    }
    Ok(parsed.unwrap_or_default())
}

/// Persistence seam for [`Preferences`].
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Result<Preferences, ExpenseError>;
    fn save(&self, preferences: &Preferences) -> Result<(), ExpenseError>;

    fn currency(&self) -> Result<Currency, ExpenseError> {
        Ok(self.load()?.currency)
    }

    fn set_currency(&self, currency: Currency) -> Result<(), ExpenseError> {
        let mut preferences = self.load()?;
        preferences.currency = currency;
        self.save(&preferences)
    }

    /// Resolves the user id: the authenticated id when present, otherwise the stored
    /// local id, otherwise a freshly generated one that is persisted.
    fn user_id(&self, authenticated: Option<&str>) -> Result<String, ExpenseError> {
        if let Some(id) = authenticated.map(str::trim).filter(|id| !id.is_empty()) {
            return Ok(id.to_string());
        }
        let mut preferences = self.load()?;
        if let Some(id) = preferences.user_id.clone() {
            return Ok(id);
        }
        let id = generate_user_id();
        preferences.user_id = Some(id.clone());
        self.save(&preferences)?;
        debug!(user_id = %id, "generated local user id");
        Ok(id)
    }
}

/// `user_<epoch millis>_<1000..=9999>`
pub fn generate_user_id() -> String {
    let suffix = 1000 + (Uuid::new_v4().as_u128() % 9000) as u32;
    format!("user_{}_{}", Utc::now().timestamp_millis(), suffix)
}

/// In-process store for tests and embedding hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    inner: Mutex<Preferences>,
}

impl MemoryPreferenceStore {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            inner: Mutex::new(preferences),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Preferences, ExpenseError> {
        self.inner
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| ExpenseError::Preferences("preference lock poisoned".into()))
    }

    fn save(&self, preferences: &Preferences) -> Result<(), ExpenseError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ExpenseError::Preferences("preference lock poisoned".into()))?;
        *guard = preferences.clone();
        Ok(())
    }
}

/// Stores preferences as pretty JSON, writing through a temp file and rename.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `$EXPENSE_CORE_HOME/preferences.json`, defaulting to `~/.expense_core`.
    pub fn from_env() -> Self {
        Self::new(app_data_dir().join(PREFERENCES_FILE))
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(base.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self) -> Result<Preferences, ExpenseError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, preferences: &Preferences) -> Result<(), ExpenseError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(preferences)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), ExpenseError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
