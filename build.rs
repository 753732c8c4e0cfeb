fn main() {
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows" {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "Maps Business Scraper");
        res.set(
            "FileDescription",
            "Desktop client for the Google Maps business scraping service",
        );
        res.compile().expect("Failed to compile Windows resources");
    }
}
