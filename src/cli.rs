use crate::models::{
    DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_FIELD, DEFAULT_VALUE, LookupRequest,
    LookupTarget, OutputFormat, QueryFilter,
};
use clap::{Arg, ArgMatches, Command, value_parser};

pub fn cli() -> Command {
    Command::new("aidata-lookup")
        .about("Look up a single document by identifier field")
        .after_help("The connection string is read from DATABASE_URL or MONGODB_URL.")
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .help("Database to query")
                .value_name("NAME")
                .default_value(DEFAULT_DATABASE),
        )
        .arg(
            Arg::new("collection")
                .short('c')
                .long("collection")
                .help("Collection to query")
                .value_name("NAME")
                .default_value(DEFAULT_COLLECTION),
        )
        .arg(
            Arg::new("field")
                .short('f')
                .long("field")
                .help("Field matched for exact equality")
                .value_name("NAME")
                .default_value(DEFAULT_FIELD),
        )
        .arg(
            Arg::new("value")
                .short('v')
                .long("value")
                .help("String value the field must equal")
                .value_name("VALUE")
                .default_value(DEFAULT_VALUE),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for the result")
                .value_name("FORMAT")
                .value_parser(value_parser!(OutputFormat))
                .default_value("relaxed"),
        )
}

/// Builds the lookup request from parsed arguments.
pub fn request_from(matches: &ArgMatches) -> LookupRequest {
    let arg = |name: &str| {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default()
    };

    LookupRequest {
        target: LookupTarget {
            database: arg("database"),
            collection: arg("collection"),
        },
        filter: QueryFilter::new(arg("field"), arg("value")),
        format: matches
            .get_one::<OutputFormat>("format")
            .copied()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> LookupRequest {
        let matches = cli()
            .try_get_matches_from(std::iter::once("aidata-lookup").chain(args.iter().copied()))
            .expect("arguments should parse");
        request_from(&matches)
    }

    #[test]
    fn test_defaults_match_quickstart_lookup() {
        let request = parse(&[]);

        assert_eq!(request.target.database, "AI-data");
        assert_eq!(request.target.collection, "images-and-interpretations");
        assert_eq!(request.filter.field, "str_id");
        assert_eq!(request.filter.value, "679eb3dcf630cd4042fe3cd4");
        assert_eq!(request.format, OutputFormat::Relaxed);
        assert_eq!(request, LookupRequest::default());
    }

    #[test]
    fn test_overrides() {
        let request = parse(&[
            "-d",
            "archive",
            "--collection",
            "labels",
            "--field",
            "image_url",
            "-v",
            "uploads/image1.jpg",
            "--format",
            "compact",
        ]);

        assert_eq!(request.target.to_string(), "archive.labels");
        assert_eq!(
            request.filter,
            QueryFilter::new("image_url", "uploads/image1.jpg")
        );
        assert_eq!(request.format, OutputFormat::Compact);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = cli().try_get_matches_from(["aidata-lookup", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        cli().debug_assert();
    }
}
