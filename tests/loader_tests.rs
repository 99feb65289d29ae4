use csv::StringRecord;
use gazetteer::{
    geonames::{Config, Error, Geonames},
    repository::Repository,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name).into()
}

#[test]
fn stream_cities_from_tsv() {
    let geonames = Geonames::new(Config::default()).from_tsv(fixture("cities_test.tsv"));
    let mut rows: Vec<StringRecord> = Vec::new();
    geonames.stream_cities(|(_, row)| rows.push(row)).unwrap();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].get(1), Some("London"));
    assert_eq!(rows[0].get(8), Some("CA"));
    // Short rows keep their own width; nothing is padded at this layer.
    assert_eq!(rows[5].len(), 2);
}

#[test]
fn quote_characters_are_literal_data() {
    let geonames = Geonames::new(Config::default()).from_tsv(fixture("cities_test.tsv"));
    let mut rows: Vec<StringRecord> = Vec::new();
    geonames.stream_cities(|(_, row)| rows.push(row)).unwrap();

    assert_eq!(rows[4].get(1), Some("Saint-\"Louis\"-du-Ha!-Ha!"));
}

#[test]
fn repository_from_tsv() {
    let geonames = Geonames::new(Config::default()).from_tsv(fixture("cities_test.tsv"));
    let repository = Repository::new().with_geonames(geonames).unwrap();

    assert_eq!(repository.len(), 6);
    let london = &repository.cities()[0];
    assert_eq!(london.name.as_ref(), "London");
    assert_eq!(london.ascii_name.as_ref(), "London");
    assert_eq!(london.alternate_names.as_ref(), "London,Londontowne");
    assert_eq!(london.country_code.as_ref(), "CA");
    assert_eq!(london.admin1_code.as_ref(), "08");
    assert_eq!(london.coordinate.latitude, 42.98339);
    assert_eq!(london.coordinate.longitude, -81.23304);
}

#[test]
fn short_row_takes_defaults() {
    let geonames = Geonames::new(Config::default()).from_tsv(fixture("cities_test.tsv"));
    let repository = Repository::new().with_geonames(geonames).unwrap();

    let shortville = &repository.cities()[5];
    assert_eq!(shortville.name.as_ref(), "Shortville");
    assert_eq!(shortville.ascii_name.as_ref(), "-");
    assert_eq!(shortville.alternate_names.as_ref(), "-");
    assert_eq!(shortville.country_code.as_ref(), "-");
    assert_eq!(shortville.admin1_code.as_ref(), "-");
    assert_eq!(shortville.coordinate.latitude, 0.0);
    assert_eq!(shortville.coordinate.longitude, 0.0);
}

#[test]
fn stream_cities_from_zip() {
    let config = Config {
        cities_file_name: "cities_test.tsv".into(),
    };
    let geonames = Geonames::new(config).from_zip(fixture("cities_test.zip"));
    let mut count = 0;
    geonames.stream_cities(|_| count += 1).unwrap();

    assert_eq!(count, 6);
}

#[test]
fn zip_without_member_file_fails() {
    let geonames = Geonames::new(Config::default()).from_zip(fixture("cities_test.zip"));
    let result = geonames.stream_cities(|_| {});

    assert!(matches!(result, Err(Error::FileNotFound(_))));
}

#[test]
fn missing_tsv_fails_with_io_error() {
    let geonames = Geonames::new(Config::default()).from_tsv(fixture("no_such_file.tsv"));
    let result = geonames.stream_cities(|_| {});

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn unconfigured_storage_streams_nothing() {
    let geonames = Geonames::default();
    let mut count = 0;
    geonames.stream_cities(|_| count += 1).unwrap();

    assert_eq!(count, 0);
}
