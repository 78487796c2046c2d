/// Whether a `pagehide` should tear the backdrop down.
///
/// `persisted` is the event's bfcache flag, `None` if it could not be read.
/// A cached page comes back with its loop intact, so only a final hide (or an
/// unreadable event) stops it.
#[inline]
pub fn teardown_on_pagehide(persisted: Option<bool>) -> bool {
    !persisted.unwrap_or(false)
}
