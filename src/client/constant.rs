pub const SITE_NAME: &str = "Folio";
