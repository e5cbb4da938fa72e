//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::PageRequest;

/// Largest accepted `pageSize`.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// `pageNumber` / `pageSize` query parameters.
///
/// Uses `serde_with` to parse the numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_number: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates the parameters and converts them to a database window.
    ///
    /// Paging applies only when both parameters are present; otherwise the
    /// whole collection is requested and `Ok(None)` is returned.
    ///
    /// # Validation
    ///
    /// - `pageNumber` is 1-indexed and must be > 0
    /// - `pageSize` must be between 1 and [`MAX_PAGE_SIZE`]
    pub fn to_page_request(&self) -> Result<Option<PageRequest>, String> {
        let (Some(page_number), Some(page_size)) = (self.page_number, self.page_size) else {
            return Ok(None);
        };

        if page_number == 0 {
            return Err("pageNumber must be greater than 0".to_string());
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(format!("pageSize must be between 1 and {MAX_PAGE_SIZE}"));
        }

        let limit = i64::from(page_size);
        let offset = (i64::from(page_number) - 1) * limit;

        Ok(Some(PageRequest::new(offset, limit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page_number: Option<u32>, page_size: Option<u32>) -> PaginationParams {
        PaginationParams {
            page_number,
            page_size,
        }
    }

    #[test]
    fn test_absent_means_unpaged() {
        assert_eq!(params(None, None).to_page_request().unwrap(), None);
    }

    #[test]
    fn test_single_param_is_ignored() {
        assert_eq!(params(Some(2), None).to_page_request().unwrap(), None);
        assert_eq!(params(None, Some(5)).to_page_request().unwrap(), None);
    }

    #[test]
    fn test_first_page() {
        assert_eq!(
            params(Some(1), Some(2)).to_page_request().unwrap(),
            Some(PageRequest::new(0, 2))
        );
    }

    #[test]
    fn test_third_page() {
        assert_eq!(
            params(Some(3), Some(50)).to_page_request().unwrap(),
            Some(PageRequest::new(100, 50))
        );
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), Some(10)).to_page_request().is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(params(Some(1), Some(0)).to_page_request().is_err());
        assert!(params(Some(1), Some(1)).to_page_request().is_ok());
        assert!(params(Some(1), Some(MAX_PAGE_SIZE)).to_page_request().is_ok());
        assert!(params(Some(1), Some(MAX_PAGE_SIZE + 1)).to_page_request().is_err());
    }

    #[test]
    fn test_large_page_number_does_not_overflow() {
        let page = params(Some(u32::MAX), Some(MAX_PAGE_SIZE))
            .to_page_request()
            .unwrap()
            .unwrap();
        assert_eq!(page.offset, (i64::from(u32::MAX) - 1) * 1000);
    }

    #[test]
    fn test_camel_case_keys() {
        let p: PaginationParams =
            serde_json::from_str(r#"{"pageNumber": "1", "pageSize": "2"}"#).unwrap();
        assert_eq!(p.page_number, Some(1));
        assert_eq!(p.page_size, Some(2));
    }
}
