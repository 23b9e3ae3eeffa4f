//! Schemas of the simple, predefined and singleton resources.

use indexmap::IndexMap;
use sonarr_types::{Attribute, AttributeType, PlanModifier, Schema, Validator};

use crate::enums;

fn object(attributes: &[(&str, Attribute)]) -> AttributeType {
    AttributeType::Object(
        attributes
            .iter()
            .map(|(name, attribute)| (name.to_string(), attribute.clone()))
            .collect::<IndexMap<_, _>>(),
    )
}

fn string() -> Attribute {
    Attribute::optional_computed(AttributeType::String)
}

fn int() -> Attribute {
    Attribute::optional_computed(AttributeType::Int64)
}

fn float() -> Attribute {
    Attribute::optional_computed(AttributeType::Float64)
}

fn flag() -> Attribute {
    Attribute::optional_computed(AttributeType::Bool)
}

fn tags() -> Attribute {
    Attribute::optional_computed(AttributeType::set_of(AttributeType::Int64)).describe("List of associated tag ids.")
}

fn one_of(values: &'static [&'static str]) -> Validator {
    Validator::OneOfStrings(values)
}

pub fn tag() -> Schema {
    Schema::new("Tag applied to series, profiles and provider items.")
        .with("id", Attribute::id())
        .with("label", Attribute::required(AttributeType::String).describe("Tag label."))
}

pub fn root_folder() -> Schema {
    let unmapped = object(&[
        ("name", Attribute::computed(AttributeType::String)),
        ("path", Attribute::computed(AttributeType::String)),
    ]);
    Schema::new("Root folder series are stored under. Changing the path replaces the folder.")
        .with("id", Attribute::id())
        .with(
            "path",
            Attribute::required(AttributeType::String)
                .describe("Root folder absolute path.")
                .modify(PlanModifier::RequiresReplace),
        )
        .with("accessible", Attribute::computed(AttributeType::Bool).describe("Access flag."))
        .with(
            "unmapped_folders",
            Attribute::computed(AttributeType::set_of(unmapped)).describe("Folders not yet mapped to a series."),
        )
}

pub fn delay_profile() -> Schema {
    Schema::new("Delay profile controlling when releases are grabbed.")
        .with("id", Attribute::id())
        .with("enable_usenet", flag().describe("Usenet allowed flag."))
        .with("enable_torrent", flag().describe("Torrent allowed flag."))
        .with("bypass_if_highest_quality", flag())
        .with("bypass_if_above_custom_format_score", flag())
        .with("minimum_custom_format_score", int())
        .with("usenet_delay", int().describe("Usenet delay in minutes."))
        .with("torrent_delay", int().describe("Torrent delay in minutes."))
        .with("order", int().describe("Evaluation order."))
        .with(
            "preferred_protocol",
            string().describe("Preferred protocol.").validate(one_of(enums::PROTOCOLS)),
        )
        .with(
            "tags",
            Attribute::required(AttributeType::set_of(AttributeType::Int64)).describe("List of associated tag ids."),
        )
}

pub fn quality_profile() -> Schema {
    let quality = object(&[
        ("id", int()),
        ("name", string()),
        ("source", string()),
        ("resolution", int()),
    ]);
    let group = object(&[
        ("id", int().describe("Group id. Omit for a single quality.")),
        ("name", string()),
        ("qualities", Attribute::required(AttributeType::list_of(quality))),
    ]);
    let format_item = object(&[("format", int()), ("name", string()), ("score", int())]);
    Schema::new("Quality profile.")
        .with("id", Attribute::id())
        .with("name", Attribute::required(AttributeType::String))
        .with("upgrade_allowed", flag())
        .with("cutoff", int().describe("Quality or group id upgrades stop at."))
        .with("cutoff_format_score", int())
        .with("min_format_score", int())
        .with("min_upgrade_format_score", int())
        .with(
            "quality_groups",
            Attribute::required(AttributeType::list_of(group)).describe("Allowed qualities, in ranking order."),
        )
        .with("format_items", Attribute::optional_computed(AttributeType::set_of(format_item)))
}

pub fn quality_definition() -> Schema {
    Schema::new("Size limits of one predefined quality. The set of qualities is fixed upstream.")
        .with(
            "id",
            Attribute::required(AttributeType::Int64)
                .describe("Quality definition id.")
                .modify(PlanModifier::RequiresReplace),
        )
        .with("title", string())
        .with("min_size", float().describe("Minimum size in MB per minute."))
        .with("max_size", float().describe("Maximum size in MB per minute."))
        .with("preferred_size", float())
        .with("quality_id", Attribute::computed(AttributeType::Int64))
        .with("quality_name", Attribute::computed(AttributeType::String))
        .with("source", Attribute::computed(AttributeType::String))
        .with("resolution", Attribute::computed(AttributeType::Int64))
}

pub fn release_profile() -> Schema {
    Schema::new("Release profile with required and ignored terms.")
        .with("id", Attribute::id())
        .with("name", string())
        .with("enabled", flag())
        .with("indexer_id", int())
        .with("required", Attribute::optional_computed(AttributeType::set_of(AttributeType::String)))
        .with("ignored", Attribute::optional_computed(AttributeType::set_of(AttributeType::String)))
        .with("tags", tags())
}

pub fn remote_path_mapping() -> Schema {
    Schema::new("Remote path mapping.")
        .with("id", Attribute::id())
        .with("host", Attribute::required(AttributeType::String))
        .with("remote_path", Attribute::required(AttributeType::String))
        .with("local_path", Attribute::required(AttributeType::String))
}

pub fn series() -> Schema {
    Schema::new("Series. Deleting it keeps the files on disk.")
        .with("id", Attribute::id())
        .with("title", Attribute::required(AttributeType::String))
        .with("title_slug", Attribute::required(AttributeType::String))
        .with(
            "tvdb_id",
            Attribute::required(AttributeType::Int64).modify(PlanModifier::RequiresReplace),
        )
        .with("monitored", Attribute::required(AttributeType::Bool))
        .with("season_folder", flag())
        .with("use_scene_numbering", flag())
        .with("quality_profile_id", Attribute::required(AttributeType::Int64))
        .with("root_folder_path", Attribute::required(AttributeType::String))
        .with("path", Attribute::computed(AttributeType::String).modify(PlanModifier::UseStateForUnknown))
        .with("series_type", string().validate(one_of(enums::SERIES_TYPES)))
        .with("tags", tags())
}

fn specification(with_range: bool) -> AttributeType {
    let mut attributes = vec![
        ("name", Attribute::required(AttributeType::String)),
        ("implementation", Attribute::required(AttributeType::String)),
        ("negate", flag()),
        ("required", flag()),
        ("value", string()),
    ];
    if with_range {
        attributes.push(("min", int()));
        attributes.push(("max", int()));
    }
    object(&attributes)
}

pub fn auto_tag() -> Schema {
    Schema::new("Auto tag rule.")
        .with("id", Attribute::id())
        .with("name", Attribute::required(AttributeType::String))
        .with("remove_tags_automatically", flag())
        .with(
            "tags",
            Attribute::required(AttributeType::set_of(AttributeType::Int64)).describe("Tags applied on match."),
        )
        .with(
            "specifications",
            Attribute::required(AttributeType::set_of(specification(false))),
        )
}

pub fn custom_format() -> Schema {
    Schema::new("Custom format.")
        .with("id", Attribute::id())
        .with("name", Attribute::required(AttributeType::String))
        .with("include_custom_format_when_renaming", flag())
        .with(
            "specifications",
            Attribute::required(AttributeType::set_of(specification(true))),
        )
}

pub fn import_list_exclusion() -> Schema {
    Schema::new("Series excluded from import lists.")
        .with("id", Attribute::id())
        .with("tvdb_id", Attribute::required(AttributeType::Int64))
        .with("title", Attribute::required(AttributeType::String))
}

fn singleton(description: &str) -> Schema {
    Schema::new(description).with(
        "id",
        Attribute::computed(AttributeType::Int64)
            .describe("Always 1.")
            .modify(PlanModifier::UseStateForUnknown),
    )
}

pub fn naming() -> Schema {
    singleton("Episode and folder naming. Deleting it only removes it from state.")
        .with("rename_episodes", Attribute::required(AttributeType::Bool))
        .with("replace_illegal_characters", Attribute::required(AttributeType::Bool))
        .with(
            "colon_replacement_format",
            int().validate(Validator::OneOfInts(enums::COLON_REPLACEMENTS)),
        )
        .with(
            "multi_episode_style",
            Attribute::required(AttributeType::Int64).validate(Validator::OneOfInts(enums::MULTI_EPISODE_STYLES)),
        )
        .with("daily_episode_format", Attribute::required(AttributeType::String))
        .with("anime_episode_format", Attribute::required(AttributeType::String))
        .with("series_folder_format", Attribute::required(AttributeType::String))
        .with("season_folder_format", Attribute::required(AttributeType::String))
        .with("specials_folder_format", Attribute::required(AttributeType::String))
        .with("standard_episode_format", Attribute::required(AttributeType::String))
}

pub fn media_management() -> Schema {
    singleton("Media management settings. Deleting it only removes it from state.")
        .with("auto_unmonitor_previously_downloaded_episodes", flag())
        .with("recycle_bin", string().describe("Recycle bin absolute path."))
        .with("recycle_bin_cleanup_days", int())
        .with(
            "download_propers_repacks",
            string().validate(one_of(enums::PROPERS_AND_REPACKS)),
        )
        .with("create_empty_series_folders", flag())
        .with("delete_empty_folders", flag())
        .with("file_date", string().validate(one_of(enums::FILE_DATES)))
        .with("rescan_after_refresh", string().validate(one_of(enums::RESCAN_AFTER_REFRESH)))
        .with("set_permissions_linux", flag())
        .with("chmod_folder", string())
        .with("chown_group", string())
        .with(
            "episode_title_required",
            string().validate(one_of(enums::EPISODE_TITLE_REQUIRED)),
        )
        .with("skip_free_space_check_when_importing", flag())
        .with("minimum_free_space_when_importing", int().describe("Minimum free space in MB."))
        .with("copy_using_hardlinks", flag())
        .with("import_extra_files", flag())
        .with("extra_file_extensions", string())
        .with("enable_media_info", flag())
}

pub fn host() -> Schema {
    let authentication = object(&[
        (
            "method",
            Attribute::required(AttributeType::String).validate(one_of(enums::AUTHENTICATION_METHODS)),
        ),
        ("required", string().validate(one_of(enums::AUTHENTICATION_REQUIRED))),
        ("username", string()),
        ("password", string().sensitive()),
    ]);
    let proxy = object(&[
        ("enabled", flag()),
        ("type", string().validate(one_of(enums::PROXY_TYPES))),
        ("hostname", string()),
        ("port", int()),
        ("username", string()),
        ("password", string().sensitive()),
        ("bypass_filter", string()),
        ("bypass_local_addresses", flag()),
    ]);
    let ssl = object(&[
        ("enabled", flag()),
        ("port", int()),
        ("cert_path", string()),
        ("cert_password", string().sensitive()),
        (
            "certificate_validation",
            string().validate(one_of(enums::CERTIFICATE_VALIDATION)),
        ),
    ]);
    let logging = object(&[
        ("log_level", string().validate(one_of(enums::LOG_LEVELS))),
        ("console_log_level", string()),
        ("analytics_enabled", flag()),
    ]);
    let backup = object(&[("folder", string()), ("interval", int()), ("retention", int())]);
    let update = object(&[
        ("mechanism", string().validate(one_of(enums::UPDATE_MECHANISMS))),
        ("branch", string()),
        ("automatically", flag()),
        ("script_path", string()),
    ]);
    singleton("Host settings. Deleting it only removes it from state.")
        .with("bind_address", Attribute::required(AttributeType::String))
        .with("port", Attribute::required(AttributeType::Int64))
        .with("url_base", string())
        .with("instance_name", string())
        .with("application_url", string())
        .with("launch_browser", flag())
        .with("authentication", Attribute::required(authentication))
        .with("proxy", Attribute::optional_computed(proxy))
        .with("ssl", Attribute::optional_computed(ssl))
        .with("logging", Attribute::optional_computed(logging))
        .with("backup", Attribute::optional_computed(backup))
        .with("update", Attribute::optional_computed(update))
}

pub fn download_client_config() -> Schema {
    singleton("Download client handling settings. Deleting it only removes it from state.")
        .with("download_client_working_folders", string())
        .with("enable_completed_download_handling", flag())
        .with("auto_redownload_failed", flag())
        .with("auto_redownload_failed_from_interactive_search", flag())
}

pub fn indexer_config() -> Schema {
    singleton("Indexer settings. Deleting it only removes it from state.")
        .with("minimum_age", Attribute::required(AttributeType::Int64).describe("Minimum age in minutes."))
        .with("retention", Attribute::required(AttributeType::Int64).describe("Retention in days."))
        .with("maximum_size", Attribute::required(AttributeType::Int64).describe("Maximum size in MB."))
        .with(
            "rss_sync_interval",
            Attribute::required(AttributeType::Int64)
                .describe("RSS sync interval in minutes.")
                .validate(Validator::IntBetween { min: 0, max: 120 }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonarr_types::{AttrValue, State};

    #[test]
    fn every_resource_declares_a_stable_id() {
        for schema in [
            tag(),
            root_folder(),
            delay_profile(),
            quality_profile(),
            release_profile(),
            remote_path_mapping(),
            series(),
            auto_tag(),
            custom_format(),
            import_list_exclusion(),
            naming(),
            media_management(),
            host(),
            download_client_config(),
            indexer_config(),
        ] {
            let id = schema.attribute("id").expect("id attribute");
            assert!(id.computed);
            assert!(id.plan_modifiers.contains(&PlanModifier::UseStateForUnknown));
        }
        assert!(quality_definition().attribute("id").unwrap().required);
    }

    #[test]
    fn naming_rejects_out_of_range_styles() {
        let mut state = State::new();
        for name in [
            "daily_episode_format",
            "anime_episode_format",
            "series_folder_format",
            "season_folder_format",
            "specials_folder_format",
            "standard_episode_format",
        ] {
            state.set(name, "{Series Title}");
        }
        state.set("rename_episodes", true);
        state.set("replace_illegal_characters", true);
        state.set("multi_episode_style", 6_i64);
        let diags = naming().validate(&state);
        assert_eq!(diags.errors().count(), 1);

        state.set("multi_episode_style", 5_i64);
        state.set("colon_replacement_format", AttrValue::Int(4));
        assert!(!naming().validate(&state).has_error());
    }

    #[test]
    fn host_passwords_are_sensitive() {
        let schema = host();
        let AttributeType::Object(authentication) = &schema.attribute("authentication").unwrap().r#type else {
            panic!("authentication is an object");
        };
        assert!(authentication["password"].sensitive);
    }
}
