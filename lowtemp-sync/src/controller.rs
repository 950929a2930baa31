//! Settings sync controller — reconciles cache, edits, and pushes.
//!
//! The controller exclusively owns the authoritative in-memory record.
//! The local cache and the remote peer are mirrors it updates; they
//! feed back only through the defined reconciliation events (load,
//! push update, save acknowledgement).

use crate::channel::MessageChannel;
use crate::error::SyncResult;
use crate::panel::PanelStatus;
use crate::protocol::PanelMessage;
use lowtemp_store::KeyValueStore;
use lowtemp_types::LowTempSettings;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Key the record is cached under in the local store.
pub const SETTINGS_KEY: &str = "lowTempSettings";

/// Configuration for the settings controller.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Local cache key for the record.
    pub settings_key: String,
    /// How long to wait for the server's initial push before falling
    /// back to the cached record.
    pub load_timeout: Duration,
    /// How long the saved indicator stays on.
    pub saved_reset: Duration,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            settings_key: SETTINGS_KEY.to_string(),
            load_timeout: Duration::from_secs(5),
            saved_reset: Duration::from_secs(3),
        }
    }
}

/// A single-field edit from the view. Merged into the record as-is;
/// ranges are checked at save time only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldEdit {
    Enabled(bool),
    TargetValue(f64),
    WaitMinutes(u32),
    SampleCount(u32),
}

/// Callback invoked with the record after each successful save.
pub type SaveCallback = Arc<dyn Fn(LowTempSettings) + Send + Sync>;

/// Shared panel state. One writer — the controller; timer tasks only
/// perform idempotent flag clears.
#[derive(Debug)]
struct PanelState {
    current: LowTempSettings,
    loading: bool,
    saved: bool,
    validation_error: Option<String>,
    /// UI-only feature switch; gates the view, never persisted.
    panel_enabled: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            current: LowTempSettings::default(),
            loading: false,
            saved: false,
            validation_error: None,
            panel_enabled: true,
        }
    }
}

/// The settings sync controller.
pub struct SettingsController {
    config: PanelConfig,
    store: Arc<dyn KeyValueStore>,
    channel: Option<Arc<dyn MessageChannel>>,
    state: Arc<RwLock<PanelState>>,
    on_save: Option<SaveCallback>,
}

impl SettingsController {
    /// Creates a controller over an injected cache and optional channel.
    pub fn new(
        config: PanelConfig,
        store: Arc<dyn KeyValueStore>,
        channel: Option<Arc<dyn MessageChannel>>,
    ) -> Self {
        Self {
            config,
            store,
            channel,
            state: Arc::new(RwLock::new(PanelState::default())),
            on_save: None,
        }
    }

    /// Attaches a callback invoked after each successful save.
    pub fn with_on_save(
        mut self,
        callback: impl Fn(LowTempSettings) + Send + Sync + 'static,
    ) -> Self {
        self.on_save = Some(Arc::new(callback));
        self
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Loads the cached record (or defaults) and arms the initial-load
    /// timeout if a server push could arrive. Sends nothing — the
    /// server pushes its record unprompted at connect time.
    pub async fn initialize(&self) {
        let record = self.load_cached();
        let waiting = self.channel.as_ref().is_some_and(|c| c.is_open());

        {
            let mut state = self.state.write().await;
            state.current = record;
            state.loading = waiting;
        }

        if waiting {
            info!("waiting for initial settings push from server");
            let state = self.state.clone();
            let timeout = self.config.load_timeout;
            tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                // Fires even if the push already landed; the clear is
                // idempotent.
                state.write().await.loading = false;
            });
        }
    }

    /// Reads the cache; absent, unparsable, or out-of-range values fall
    /// back to the default record.
    fn load_cached(&self) -> LowTempSettings {
        match self.store.get(&self.config.settings_key) {
            Ok(Some(raw)) => match LowTempSettings::from_json(&raw) {
                Ok(record) if record.validate().is_ok() => {
                    debug!("loaded settings from local cache");
                    record
                }
                _ => {
                    warn!("cached settings invalid, using defaults");
                    LowTempSettings::default()
                }
            },
            Ok(None) => LowTempSettings::default(),
            Err(e) => {
                warn!("failed to read settings cache: {e}");
                LowTempSettings::default()
            }
        }
    }

    // ── Frame handling ───────────────────────────────────────────

    /// Handles one inbound text frame. Frames that do not decode to a
    /// [`PanelMessage`] are ignored.
    pub async fn handle_frame(&self, raw: &str) {
        let message = match PanelMessage::decode(raw) {
            Ok(message) => message,
            Err(e) => {
                debug!("ignoring unrecognized frame: {e}");
                return;
            }
        };

        match message {
            PanelMessage::Initial(payload) => self.handle_initial(payload).await,
            PanelMessage::Saved(payload) => self.handle_saved(payload).await,
            PanelMessage::Error(text) => {
                // Logged only; server errors are not surfaced to the user.
                warn!("server reported error: {text}");
            }
            PanelMessage::Save(_) => {
                debug!("ignoring inbound save request frame");
            }
        }
    }

    /// Server push with the authoritative record. Replaces `current`
    /// wholesale and writes through to the cache. An invalid payload
    /// silently falls back to the existing record. Idempotent per
    /// distinct push.
    async fn handle_initial(&self, payload: Value) {
        let record = serde_json::from_value::<LowTempSettings>(payload)
            .ok()
            .filter(|r| r.validate().is_ok());

        let mut state = self.state.write().await;
        state.loading = false;
        match record {
            Some(record) => {
                info!("applying initial settings push from server");
                state.current = record.clone();
                drop(state);
                if let Err(e) = self.persist(&record) {
                    warn!("failed to cache pushed settings: {e}");
                }
            }
            None => {
                debug!("invalid initial settings push, keeping cached record");
            }
        }
    }

    /// Server acknowledgement of a save. The payload must parse as a
    /// record but is not range-checked.
    async fn handle_saved(&self, payload: Value) {
        match serde_json::from_value::<LowTempSettings>(payload) {
            Ok(record) => {
                debug!("server confirmed save: {record:?}");
                self.mark_saved().await;
            }
            Err(e) => {
                warn!("malformed save confirmation from server: {e}");
            }
        }
    }

    /// Sets the saved flag and arms its reset timer.
    async fn mark_saved(&self) {
        self.state.write().await.saved = true;
        let state = self.state.clone();
        let reset = self.config.saved_reset;
        tokio::spawn(async move {
            tokio::time::sleep(reset).await;
            state.write().await.saved = false;
        });
    }

    // ── Edits ────────────────────────────────────────────────────

    /// Merges one field edit into the record, unconditionally. No
    /// clamping; ranges are checked at save time only.
    pub async fn edit(&self, edit: FieldEdit) {
        let mut state = self.state.write().await;
        match edit {
            FieldEdit::Enabled(v) => state.current.enabled = v,
            FieldEdit::TargetValue(v) => state.current.target_value = v,
            FieldEdit::WaitMinutes(v) => state.current.wait_minutes = v,
            FieldEdit::SampleCount(v) => state.current.sample_count = v,
        }
    }

    /// UI-only feature switch; never persisted, never validated.
    pub async fn set_panel_enabled(&self, enabled: bool) {
        self.state.write().await.panel_enabled = enabled;
    }

    // ── Save ─────────────────────────────────────────────────────

    /// Validates and persists the current record, then requests a
    /// server-side save if the channel is open.
    ///
    /// A closed or absent channel still counts as a local success: the
    /// request is not queued or retried, so saves made while
    /// disconnected are lost from the server's perspective.
    pub async fn save(&self) {
        let record = {
            let mut state = self.state.write().await;
            if let Err(e) = state.current.validate() {
                state.validation_error = Some(e.to_string());
                return;
            }
            state.validation_error = None;
            state.current.clone()
        };

        if let Err(e) = self.persist(&record) {
            warn!("failed to write settings cache: {e}");
        }

        match &self.channel {
            Some(channel) if channel.is_open() => {
                match self.send_save_request(channel, &record).await {
                    Ok(()) => debug!("save request sent"),
                    Err(e) => warn!("failed to send save request: {e}"),
                }
            }
            _ => {
                warn!("channel not open, settings saved locally only");
            }
        }

        if let Some(on_save) = &self.on_save {
            on_save(record);
        }

        self.mark_saved().await;
    }

    fn persist(&self, record: &LowTempSettings) -> SyncResult<()> {
        let json = record.to_json()?;
        self.store.put(&self.config.settings_key, &json)?;
        Ok(())
    }

    async fn send_save_request(
        &self,
        channel: &Arc<dyn MessageChannel>,
        record: &LowTempSettings,
    ) -> SyncResult<()> {
        let frame = PanelMessage::save_request(record).encode()?;
        channel.send(&frame).await
    }

    // ── Accessors ────────────────────────────────────────────────

    /// The authoritative in-memory record.
    pub async fn current(&self) -> LowTempSettings {
        self.state.read().await.current.clone()
    }

    /// Whether the initial server push is still awaited.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Whether the saved indicator is on.
    pub async fn is_saved(&self) -> bool {
        self.state.read().await.saved
    }

    /// The current validation error, if the last save was rejected.
    pub async fn validation_error(&self) -> Option<String> {
        self.state.read().await.validation_error.clone()
    }

    /// The UI-only feature switch.
    pub async fn panel_enabled(&self) -> bool {
        self.state.read().await.panel_enabled
    }

    /// Whether the view should allow a save: the feature switch is on
    /// and no initial load is in flight. [`save`](Self::save) itself
    /// enforces nothing beyond range validation.
    pub async fn can_save(&self) -> bool {
        let state = self.state.read().await;
        state.panel_enabled && !state.loading
    }

    /// The single status indicator the view shows.
    pub async fn status(&self) -> PanelStatus {
        let state = self.state.read().await;
        if state.loading {
            PanelStatus::Loading
        } else if let Some(message) = &state.validation_error {
            PanelStatus::Invalid(message.clone())
        } else if state.saved {
            PanelStatus::Saved
        } else {
            PanelStatus::Idle
        }
    }
}
