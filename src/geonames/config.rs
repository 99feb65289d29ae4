pub struct Config {
    /// Name of the gazetteer member file inside a zip archive. GeoNames city
    /// extracts ship as `<name>.zip` containing `<name>.txt`.
    pub cities_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cities_file_name: "cities.txt".into(),
        }
    }
}
