use crate::constants::MUTE_STORAGE_KEY;
use crate::core::{decode_mute, encode_mute, MuteStore};
use web_sys as web;

/// Mute flag in `window.localStorage`. Without storage (privacy modes,
/// sandboxed frames) the flag lives for the session only.
pub struct LocalStorageMute {
    storage: Option<web::Storage>,
}

impl LocalStorageMute {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[sound] localStorage unavailable; mute state will not persist");
        }
        Self { storage }
    }
}

impl MuteStore for LocalStorageMute {
    fn load(&self) -> Option<bool> {
        let raw = self
            .storage
            .as_ref()?
            .get_item(MUTE_STORAGE_KEY)
            .ok()
            .flatten()?;
        Some(decode_mute(&raw))
    }

    fn store(&mut self, muted: bool) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(MUTE_STORAGE_KEY, encode_mute(muted)) {
                log::debug!("[sound] persisting mute failed: {:?}", e);
            }
        }
    }
}
