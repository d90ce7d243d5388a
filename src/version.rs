//! Product identity string.

/// Product name as published.
pub const PRODUCT_NAME: &str = env!("CARGO_PKG_NAME");

/// Product version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project homepage.
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");

/// Returns `"<name> v<version> (<homepage>)"`.
#[must_use]
pub fn version_string() -> String {
    format!("{PRODUCT_NAME} v{VERSION} ({HOMEPAGE})")
}

/// Writes the version string into `buf` as a NUL-terminated byte string.
///
/// Output is truncated to fit. Nothing is written past `buf.len()`, and the
/// terminator is always written when `buf` is non-empty. Returns the number
/// of bytes written, not counting the terminator.
pub fn write_version(buf: &mut [u8]) -> usize {
    let Some(capacity) = buf.len().checked_sub(1) else {
        return 0;
    };

    let text = version_string();
    let len = text.len().min(capacity);
    buf[..len].copy_from_slice(&text.as_bytes()[..len]);
    buf[len] = 0;
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_has_all_parts() {
        let s = version_string();
        assert!(s.starts_with(PRODUCT_NAME));
        assert!(s.contains(VERSION));
        assert!(s.ends_with(&format!("({HOMEPAGE})")));
    }

    #[test]
    fn write_version_fits_large_buffer() {
        let mut buf = [0xffu8; 256];
        let written = write_version(&mut buf);

        assert_eq!(&buf[..written], version_string().as_bytes());
        assert_eq!(buf[written], 0);
    }

    #[test]
    fn write_version_truncates_small_buffer() {
        let mut buf = [0xffu8; 5];
        let written = write_version(&mut buf);

        assert_eq!(written, 4);
        assert_eq!(&buf[..4], &version_string().as_bytes()[..4]);
        assert_eq!(buf[4], 0);
    }

    #[test]
    fn write_version_single_byte_is_terminator_only() {
        let mut buf = [0xffu8; 1];
        assert_eq!(write_version(&mut buf), 0);
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn write_version_empty_buffer_writes_nothing() {
        let mut buf: [u8; 0] = [];
        assert_eq!(write_version(&mut buf), 0);
    }
}
