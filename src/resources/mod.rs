//! Built-in resource schema declarations
//!
//! Each function here is a pure data table: the field names, identity
//! pattern, enum token sets, and rule parameters for one resource type.
//! Adding a resource means adding one table, not another copy of the
//! validator or repository.

use crate::core::rules::Rule;
use crate::core::schema::{FieldType, ResourceSchema};

const GENDERS: &[&str] = &["MALE", "FEMALE"];
const BOOK_GENRES: &[&str] = &["FICTION", "NON_FICTION", "SCIENCE"];
const MOVIE_GENRES: &[&str] = &["ACTION", "DRAMA", "COMEDY", "SCI_FI"];
const TASK_STATUSES: &[&str] = &["PENDING", "IN_PROGRESS", "COMPLETED"];
const TASK_PRIORITIES: &[&str] = &["LOW", "MEDIUM", "HIGH"];
const EVENT_TYPES: &[&str] = &["CONFERENCE", "WORKSHOP", "PARTY", "SEMINAR"];
const LOGIN_GENDERS: &[&str] = &["MAN", "WOMEN"];
const RARITIES: &[&str] = &["COMMON", "UNCOMMON", "RARE", "EXTREMELY_RARE"];
const MECHANISMS: &[&str] = &["MECHANICAL", "QUARTZ", "PENDULUM", "SPRING_DRIVEN"];
const MISSION_TYPES: &[&str] = &["ORBITAL", "LUNAR", "MARS", "DEEP_SPACE"];
const CARGO_TYPES: &[&str] = &["MEDICAL", "FOOD", "ELECTRONICS", "DOCUMENTS"];

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Users keyed by taxpayer number (10 or 12 digits)
pub fn user_schema() -> ResourceSchema {
    ResourceSchema::builder("user", "users")
        .identity("inn", vec![Rule::Digits { lengths: &[10, 12] }])
        .enum_field("gender", GENDERS)
        .field("name", FieldType::String, vec![])
        .field("first_name", FieldType::String, vec![])
        .field("last_name", FieldType::String, vec![])
        .field("address", FieldType::String, vec![])
        .build()
}

/// Library books keyed by ISBN (10 or 13 digits)
pub fn book_schema() -> ResourceSchema {
    ResourceSchema::builder("book", "books")
        .identity("isbn", vec![Rule::Digits { lengths: &[10, 13] }])
        .enum_field("genre", BOOK_GENRES)
        .field("title", FieldType::String, vec![])
        .field("author", FieldType::String, vec![])
        .field("pages", FieldType::Integer, vec![Rule::Positive])
        .build()
}

/// Movies keyed by an alphanumeric id of at least five characters
pub fn movie_schema() -> ResourceSchema {
    ResourceSchema::builder("movie", "movies")
        .identity("movie_id", vec![Rule::matches(r"^[A-Za-z0-9]{5,}$")])
        .enum_field("genre", MOVIE_GENRES)
        .field("title", FieldType::String, vec![])
        .field("director", FieldType::String, vec![])
        .field(
            "release_year",
            FieldType::Integer,
            vec![Rule::Range {
                min: 1888.0,
                max: 2025.0,
            }],
        )
        .build()
}

/// To-do tasks; creation time must not lie in the future
pub fn task_schema() -> ResourceSchema {
    ResourceSchema::builder("task", "tasks")
        .identity("task_id", vec![Rule::matches(r"^[A-Za-z0-9]{3,}$")])
        .enum_field("status", TASK_STATUSES)
        .field("description", FieldType::String, vec![Rule::MinLength(5)])
        .enum_field("priority", TASK_PRIORITIES)
        .field("created_at", FieldType::Timestamp, vec![Rule::NotInFuture])
        .build()
}

/// Scheduled events; the date must not lie in the past
pub fn event_schema() -> ResourceSchema {
    ResourceSchema::builder("event", "events")
        .identity("event_id", vec![Rule::matches(r"^[A-Za-z0-9]{4,}$")])
        .field("name", FieldType::String, vec![Rule::MinLength(3)])
        .field("date", FieldType::Timestamp, vec![Rule::NotInPast])
        .field("location", FieldType::String, vec![])
        .enum_field("event_type", EVENT_TYPES)
        .build()
}

/// Login accounts keyed by email address.
///
/// The password policy (min 8, upper, lower, digit, special) is expressed as
/// a rule per requirement since the regex crate has no lookahead; the first
/// unmet requirement is the one reported.
pub fn login_schema() -> ResourceSchema {
    ResourceSchema::builder("login", "logins")
        .identity("mail_id", vec![Rule::matches(EMAIL_PATTERN)])
        .field(
            "password",
            FieldType::String,
            vec![
                Rule::matches(r"^[A-Za-z0-9@$!%*#?&]{8,}$"),
                Rule::matches(r"[a-z]"),
                Rule::matches(r"[A-Z]"),
                Rule::matches(r"[0-9]"),
                Rule::matches(r"[@$!%*#?&]"),
            ],
        )
        .field("first_name", FieldType::String, vec![Rule::MinLength(2)])
        .field("last_name", FieldType::String, vec![Rule::MinLength(2)])
        .field("patronymic", FieldType::String, vec![Rule::MinLength(2)])
        .enum_field("gender", LOGIN_GENDERS)
        .field("age", FieldType::Integer, vec![Rule::Min(18.0)])
        .build()
}

/// Mineral collection keyed by catalog id (`XX-1234`)
pub fn mineral_schema() -> ResourceSchema {
    ResourceSchema::builder("mineral", "minerals")
        .identity("catalog_id", vec![Rule::matches(r"^[A-Z]{2}-\d{4}$")])
        .field("name", FieldType::String, vec![Rule::MinLength(3)])
        .field(
            "chemical_formula",
            FieldType::String,
            vec![Rule::matches(r"[A-Za-z]"), Rule::matches(r"\d")],
        )
        .field(
            "hardness",
            FieldType::Float,
            vec![Rule::Range {
                min: 1.0,
                max: 10.0,
            }],
        )
        .field("weight_carats", FieldType::Float, vec![Rule::Positive])
        .enum_field("rarity", RARITIES)
        .field("origin_country", FieldType::String, vec![Rule::MinLength(2)])
        .field("specimens_count", FieldType::Integer, vec![Rule::Min(0.0)])
        .build()
}

/// Antique clocks keyed by serial number (6 to 12 capitals and digits)
pub fn clock_schema() -> ResourceSchema {
    ResourceSchema::builder("clock", "clocks")
        .identity("serial_number", vec![Rule::matches(r"^[A-Z0-9]{6,12}$")])
        .field("brand", FieldType::String, vec![Rule::MinLength(2)])
        .field("model", FieldType::String, vec![Rule::MinLength(2)])
        .field(
            "manufacture_year",
            FieldType::Integer,
            vec![Rule::Range {
                min: 1600.0,
                max: 2025.0,
            }],
        )
        .enum_field("mechanism", MECHANISMS)
        .field("material", FieldType::String, vec![Rule::MinLength(3)])
        .field(
            "condition_grade",
            FieldType::Integer,
            vec![Rule::Range {
                min: 1.0,
                max: 10.0,
            }],
        )
        .build()
}

/// Space missions keyed by mission code (`XX-1234-A`); launches are never
/// scheduled in the past
pub fn mission_schema() -> ResourceSchema {
    ResourceSchema::builder("mission", "missions")
        .identity("mission_code", vec![Rule::matches(r"^[A-Z]{2}-\d{4}-[A-Z]$")])
        .field("mission_name", FieldType::String, vec![Rule::MinLength(3)])
        .field("launch_site", FieldType::String, vec![Rule::MinLength(5)])
        .field("launch_date", FieldType::Timestamp, vec![Rule::NotInPast])
        .enum_field("mission_type", MISSION_TYPES)
        .field("spacecraft", FieldType::String, vec![Rule::MinLength(3)])
        .field("crew_size", FieldType::Integer, vec![Rule::Min(0.0)])
        .build()
}

/// Drone cargo flights keyed by flight id (`FL-12345-A`)
pub fn flight_schema() -> ResourceSchema {
    ResourceSchema::builder("flight", "flights")
        .identity("flight_id", vec![Rule::matches(r"^FL-\d{5}-[A-Z]$")])
        .field("drone_id", FieldType::String, vec![Rule::matches(r"^DRN-\d{4}$")])
        .field("departure_point", FieldType::String, vec![Rule::MinLength(3)])
        .field("destination", FieldType::String, vec![Rule::MinLength(3)])
        .field("departure_time", FieldType::Timestamp, vec![Rule::NotInPast])
        .enum_field("cargo_type", CARGO_TYPES)
        .field(
            "cargo_weight_kg",
            FieldType::Float,
            vec![Rule::Positive, Rule::Max(50.0)],
        )
        .field(
            "max_altitude_m",
            FieldType::Integer,
            vec![Rule::Range {
                min: 10.0,
                max: 400.0,
            }],
        )
        .build()
}

/// All built-in resource schemas
pub fn all() -> Vec<ResourceSchema> {
    vec![
        user_schema(),
        book_schema(),
        movie_schema(),
        task_schema(),
        event_schema(),
        login_schema(),
        mineral_schema(),
        clock_schema(),
        mission_schema(),
        flight_schema(),
    ]
}
