use crate::server::error::AppError;

/// Largest page size an admin listing returns.
pub const MAX_PER_PAGE: u64 = 100;

/// Clamps `per_page` to `1..=MAX_PER_PAGE` and rejects pages whose row offset
/// does not fit a database integer.
///
/// # Returns
/// - `Ok((page, per_page))` - Page unchanged, page size clamped
/// - `Err(AppError::BadRequest)` - `page * per_page` overflows
pub fn bounded(page: u64, per_page: u64) -> Result<(u64, u64), AppError> {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);

    match page.checked_mul(per_page) {
        Some(offset) if offset <= i64::MAX as u64 => Ok((page, per_page)),
        _ => Err(AppError::BadRequest("Page number is out of range".to_string())),
    }
}

/// Number of pages needed for `total` items.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_size() {
        assert_eq!(bounded(0, 0).unwrap(), (0, 1));
        assert_eq!(bounded(2, 10).unwrap(), (2, 10));
        assert_eq!(bounded(0, 10_000).unwrap(), (0, MAX_PER_PAGE));
    }

    #[test]
    fn rejects_offset_overflow() {
        assert!(matches!(
            bounded(u64::MAX / 2, 10),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            bounded(i64::MAX as u64, 10),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn counts_pages() {
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
    }
}
