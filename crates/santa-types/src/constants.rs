//! System-wide constants for the Secret Santa draw engine.

/// Minimum number of participants for a draw to be possible.
pub const MIN_PARTICIPANTS: usize = 2;

/// Default step budget for a single draw. `None` means unbounded search.
pub const DEFAULT_MAX_STEPS: Option<u64> = None;

/// Whether the ledger re-checks every matcher result before committing it.
pub const DEFAULT_VERIFY_BEFORE_COMMIT: bool = true;

/// Display name used when an identifier is not present in the roster.
pub const UNKNOWN_PARTICIPANT_NAME: &str = "Unknown";

/// Domain tag for the roster hash.
pub const ROSTER_HASH_TAG: &[u8] = b"santa:roster:v1:";

/// Domain tag for the draw root hash.
pub const DRAW_ROOT_TAG: &[u8] = b"santa:draw_root:v1:";
