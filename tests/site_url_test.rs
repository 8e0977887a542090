//! Tests for site URL normalization.

use sp_drive::url_parser::site_path;

mod browser_urls {
    use super::*;

    #[test]
    fn basic_site_url() {
        let url = "https://contoso.sharepoint.com/sites/Marketing";
        assert_eq!(
            site_path(url).unwrap(),
            "contoso.sharepoint.com:/sites/Marketing"
        );
    }

    #[test]
    fn site_url_with_hyphenated_name() {
        let url = "https://contoso.sharepoint.com/sites/Website-ApplicationForms";
        assert_eq!(
            site_path(url).unwrap(),
            "contoso.sharepoint.com:/sites/Website-ApplicationForms"
        );
    }

    #[test]
    fn site_url_http() {
        let url = "http://contoso.sharepoint.com/sites/Marketing";
        assert_eq!(
            site_path(url).unwrap(),
            "contoso.sharepoint.com:/sites/Marketing"
        );
    }

    #[test]
    fn site_url_with_trailing_path() {
        let url = "https://contoso.sharepoint.com/sites/Marketing/Shared%20Documents/Forms";
        assert_eq!(
            site_path(url).unwrap(),
            "contoso.sharepoint.com:/sites/Marketing"
        );
    }

    #[test]
    fn site_url_with_query_params() {
        let url = "https://contoso.sharepoint.com/sites/Marketing?web=1";
        assert_eq!(
            site_path(url).unwrap(),
            "contoso.sharepoint.com:/sites/Marketing"
        );
    }

    #[test]
    fn teams_url() {
        let url = "https://contoso.sharepoint.com/teams/Engineering";
        assert_eq!(
            site_path(url).unwrap(),
            "contoso.sharepoint.com:/teams/Engineering"
        );
    }
}

mod graph_paths {
    use super::*;

    #[test]
    fn site_path_passthrough() {
        let path = "contoso.sharepoint.com:/sites/Marketing";
        assert_eq!(site_path(path).unwrap(), path);
    }

    #[test]
    fn teams_path_passthrough() {
        let path = "contoso.sharepoint.com:/teams/Engineering";
        assert_eq!(site_path(path).unwrap(), path);
    }

    #[test]
    fn path_with_whitespace_trimmed() {
        assert_eq!(
            site_path("  contoso.sharepoint.com:/sites/Marketing  ").unwrap(),
            "contoso.sharepoint.com:/sites/Marketing"
        );
        assert_eq!(
            site_path("\tcontoso.sharepoint.com:/sites/Marketing\n").unwrap(),
            "contoso.sharepoint.com:/sites/Marketing"
        );
    }
}

mod root_site {
    use super::*;

    #[test]
    fn bare_hostname() {
        assert_eq!(
            site_path("contoso.sharepoint.com").unwrap(),
            "contoso.sharepoint.com"
        );
    }
}

mod invalid_inputs {
    use super::*;

    #[test]
    fn empty_string() {
        assert!(site_path("").is_err());
    }

    #[test]
    fn whitespace_only() {
        assert!(site_path("   ").is_err());
        assert!(site_path("\t\n").is_err());
    }

    #[test]
    fn non_sharepoint_host() {
        assert!(site_path("https://example.com/sites/Marketing").is_err());
        assert!(site_path("https://drive.google.com/drive/folders/abc").is_err());
    }

    #[test]
    fn hostname_without_managed_path() {
        assert!(site_path("https://contoso.sharepoint.com/").is_err());
        assert!(site_path("https://contoso.sharepoint.com/personal/user").is_err());
    }

    #[test]
    fn bare_site_name() {
        assert!(site_path("Marketing").is_err());
    }
}
