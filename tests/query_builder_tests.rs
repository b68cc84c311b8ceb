use shopgrid::error::ScrapeError;
use shopgrid::query::{QueryBuilder, QueryMode, SearchRequest};

#[cfg(test)]
mod summary_mode {
    use super::*;

    #[test]
    fn test_digital_camera() {
        let target = QueryBuilder::default()
            .build_from_tokens(&["digital", "camera"])
            .unwrap();
        assert_eq!(
            target.as_str(),
            "http://www.shopping.com/products?CLT=SCH&KW=digital%20camera"
        );
        assert_eq!(target.mode(), QueryMode::Summary);
    }

    #[test]
    fn test_single_keyword() {
        let target = QueryBuilder::default().build_from_tokens(&["tv"]).unwrap();
        assert_eq!(
            target.to_string(),
            "http://www.shopping.com/products?CLT=SCH&KW=tv"
        );
    }

    #[test]
    fn test_keeps_token_order() {
        let tokens = ["a", "b", "c", "d"];
        let target = QueryBuilder::default().build_from_tokens(&tokens).unwrap();
        assert!(target.as_str().ends_with("KW=a%20b%20c%20d"));
    }

    #[test]
    fn test_mixed_alphanumeric_last_token_is_keyword() {
        let target = QueryBuilder::default()
            .build_from_tokens(&["canon", "5d"])
            .unwrap();
        assert_eq!(target.mode(), QueryMode::Summary);
        assert!(target.as_str().ends_with("KW=canon%205d"));
    }

    #[test]
    fn test_hyphenated_word_is_keyword() {
        let target = QueryBuilder::default()
            .build_from_tokens(&["usb", "-c"])
            .unwrap();
        assert_eq!(target.mode(), QueryMode::Summary);
        assert!(target.as_str().ends_with("KW=usb%20-c"));
    }

    #[test]
    fn test_numeric_keyword_before_last_token() {
        let target = QueryBuilder::default()
            .build_from_tokens(&["iphone", "15", "case"])
            .unwrap();
        assert_eq!(target.mode(), QueryMode::Summary);
        assert!(target.as_str().ends_with("KW=iphone%2015%20case"));
    }
}

#[cfg(test)]
mod detail_mode {
    use super::*;

    #[test]
    fn test_baby_strollers_page_two() {
        let target = QueryBuilder::default()
            .build_from_tokens(&["baby", "strollers", "2"])
            .unwrap();
        assert_eq!(
            target.as_str(),
            "http://www.shopping.com/products~PG-2?KW=baby%20strollers"
        );
        assert_eq!(target.mode(), QueryMode::Detail { page: 2 });
    }

    #[test]
    fn test_page_number_is_parsed_integer() {
        let target = QueryBuilder::default()
            .build_from_tokens(&["laptop", "0012"])
            .unwrap();
        assert_eq!(target.mode(), QueryMode::Detail { page: 12 });
        assert_eq!(
            target.as_str(),
            "http://www.shopping.com/products~PG-12?KW=laptop"
        );
    }

    #[test]
    fn test_page_token_excluded_from_keywords() {
        let request = SearchRequest::from_tokens(&["baby", "strollers", "3"]).unwrap();
        assert_eq!(request.keywords(), ["baby", "strollers"]);
        assert_eq!(request.search_key(), "baby%20strollers");
    }

    #[test]
    fn test_custom_host() {
        let target = QueryBuilder::new("http://localhost:8080/")
            .build_from_tokens(&["mug", "1"])
            .unwrap();
        assert_eq!(target.as_str(), "http://localhost:8080/products~PG-1?KW=mug");
    }
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn test_no_tokens() {
        let tokens: [&str; 0] = [];
        let err = QueryBuilder::default().build_from_tokens(&tokens).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "No query is found");
    }

    #[test]
    fn test_negative_page_number() {
        let err = SearchRequest::from_tokens(&["camera", "-5"]).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidPageNumber(_)));
        assert_eq!(err.to_string(), "Page Number cannot be Negative");
    }

    #[test]
    fn test_lone_negative_token() {
        let err = SearchRequest::from_tokens(&["-5"]).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidPageNumber(_)));
    }

    #[test]
    fn test_zero_page_number() {
        let err = SearchRequest::from_tokens(&["camera", "0"]).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidPageNumber(_)));
        assert_eq!(err.to_string(), "Invalid Page Number");
    }

    #[test]
    fn test_page_number_overflow() {
        let err = SearchRequest::from_tokens(&["camera", "4294967296"]).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidPageNumber(_)));
    }

    #[test]
    fn test_page_number_without_keywords() {
        let err = SearchRequest::from_tokens(&["2"]).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_token() {
        let err = SearchRequest::from_tokens(&["camera", ""]).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidArgument(_)));
    }

    #[test]
    fn test_handled_kinds() {
        assert!(ScrapeError::no_query().is_handled());
        assert!(ScrapeError::page_not_exist().is_handled());
        assert!(ScrapeError::InvalidPageNumber("x".into()).is_handled());
        assert!(
            !ScrapeError::MissingNode {
                slot: 1,
                node: "nameQA1".into()
            }
            .is_handled()
        );
    }
}
