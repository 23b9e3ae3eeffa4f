//! Provider-item families and their variants.
//!
//! Every variant pins the discriminator trio (`implementation`,
//! `config_contract` and, where the family has one, `protocol` or
//! `list_type`) and declares the envelope fields it understands.

use sonarr_types::{Attribute, AttributeType, PlanModifier, Schema, Validator};
use sonarr_util::{FieldKind, FieldSpec};

use crate::enums;

/// A polymorphic upstream collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemFamily {
    DownloadClient,
    Indexer,
    Notification,
    ImportList,
    Metadata,
}

impl ItemFamily {
    pub const ALL: [ItemFamily; 5] = [
        Self::DownloadClient,
        Self::Indexer,
        Self::Notification,
        Self::ImportList,
        Self::Metadata,
    ];

    /// Entity name, used as the resource name prefix.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DownloadClient => "download_client",
            Self::Indexer => "indexer",
            Self::Notification => "notification",
            Self::ImportList => "import_list",
            Self::Metadata => "metadata",
        }
    }

    /// Attribute and data-source name of the family listing.
    pub const fn plural(self) -> &'static str {
        match self {
            Self::DownloadClient => "download_clients",
            Self::Indexer => "indexers",
            Self::Notification => "notifications",
            Self::ImportList => "import_lists",
            Self::Metadata => "metadata_consumers",
        }
    }

    pub const fn has_protocol(self) -> bool {
        matches!(self, Self::DownloadClient | Self::Indexer)
    }

    pub fn variants(self) -> impl Iterator<Item = &'static VariantSpec> {
        VARIANTS.iter().filter(move |variant| variant.family == self)
    }

    /// Attributes shared by every variant of the family.
    pub fn generic_schema(self) -> Schema {
        let schema = Schema::new("")
            .with("id", Attribute::id())
            .with("name", Attribute::required(AttributeType::String).describe("Display name."));
        let schema = match self {
            Self::DownloadClient => schema
                .with("enable", flag())
                .with("priority", int().validate(Validator::IntBetween { min: 1, max: 50 }))
                .with("remove_completed_downloads", flag())
                .with("remove_failed_downloads", flag()),
            Self::Indexer => schema
                .with("enable_automatic_search", flag())
                .with("enable_interactive_search", flag())
                .with("enable_rss", flag())
                .with("priority", int().validate(Validator::IntBetween { min: 1, max: 50 }))
                .with("download_client_id", int())
                .with("season_search_maximum_single_episode_age", int()),
            Self::Notification => [
                "on_grab",
                "on_download",
                "on_upgrade",
                "on_rename",
                "on_series_add",
                "on_series_delete",
                "on_episode_file_delete",
                "on_episode_file_delete_for_upgrade",
                "on_health_issue",
                "on_health_restored",
                "on_application_update",
                "on_manual_interaction_required",
                "include_health_warnings",
            ]
            .into_iter()
            .fold(schema, |schema, name| schema.with(name, flag())),
            Self::ImportList => schema
                .with("enable_automatic_add", flag())
                .with("search_for_missing_episodes", flag())
                .with("should_monitor", string().validate(Validator::OneOfStrings(enums::SHOULD_MONITOR)))
                .with(
                    "monitor_new_items",
                    string().validate(Validator::OneOfStrings(enums::MONITOR_NEW_ITEMS)),
                )
                .with("root_folder_path", Attribute::required(AttributeType::String))
                .with("quality_profile_id", Attribute::required(AttributeType::Int64))
                .with("series_type", string().validate(Validator::OneOfStrings(enums::SERIES_TYPES)))
                .with("season_folder", flag()),
            Self::Metadata => schema.with("enable", flag()),
        };
        schema.with(
            "tags",
            Attribute::optional_computed(AttributeType::set_of(AttributeType::Int64)).describe("List of associated tag ids."),
        )
    }
}

fn flag() -> Attribute {
    Attribute::optional_computed(AttributeType::Bool)
}

fn int() -> Attribute {
    Attribute::optional_computed(AttributeType::Int64)
}

fn string() -> Attribute {
    Attribute::optional_computed(AttributeType::String)
}

/// One concrete implementation behind a family discriminator.
#[derive(Debug, Clone)]
pub struct VariantSpec {
    pub family: ItemFamily,
    /// Snake-case variant name, the resource name suffix.
    pub name: &'static str,
    pub implementation: &'static str,
    pub config_contract: &'static str,
    pub protocol: Option<&'static str>,
    pub list_type: Option<&'static str>,
    pub description: &'static str,
    pub fields: FieldSpec,
    /// Field attributes the configuration must set.
    pub required: &'static [&'static str],
    pub validators: &'static [(&'static str, Validator)],
}

impl VariantSpec {
    /// Resource name without the provider prefix, e.g. `download_client_pneumatic`.
    pub fn entity_name(&self) -> String {
        format!("{}_{}", self.family.name(), self.name)
    }

    /// Generic family attributes plus the variant's envelope fields.
    pub fn schema(&self) -> Schema {
        let mut schema = self.family.generic_schema();
        schema.description = self.description.to_string();
        for (name, kind) in self.fields.attributes() {
            let r#type = match kind {
                FieldKind::String => AttributeType::String,
                FieldKind::Int => AttributeType::Int64,
                FieldKind::Bool => AttributeType::Bool,
                FieldKind::Float => AttributeType::Float64,
                FieldKind::IntSlice => AttributeType::set_of(AttributeType::Int64),
                FieldKind::StringSlice => AttributeType::set_of(AttributeType::String),
            };
            let mut attribute = if self.required.contains(&name) {
                Attribute::required(r#type)
            } else {
                Attribute::optional_computed(r#type)
            };
            if self.fields.is_sensitive(name) {
                attribute = attribute.sensitive().modify(PlanModifier::UseStateForUnknown);
            }
            for (target, validator) in self.validators {
                if *target == name {
                    attribute = attribute.validate(validator.clone());
                }
            }
            schema.insert(name, attribute);
        }
        schema
    }
}

/// Look up a variant by family and snake-case name.
pub fn variant(family: ItemFamily, name: &str) -> Option<&'static VariantSpec> {
    family.variants().find(|variant| variant.name == name)
}

const DOWNLOAD_CLIENT_PRIORITIES: &[&str] = &["recent_tv_priority", "older_tv_priority"];

const SEED_CRITERIA: &[(&str, &str)] = &[
    ("seed_ratio", "seedCriteria.seedRatio"),
    ("seed_time", "seedCriteria.seedTime"),
    ("season_pack_seed_time", "seedCriteria.seasonPackSeedTime"),
];

const fn download_client(
    name: &'static str,
    implementation: &'static str,
    config_contract: &'static str,
    protocol: &'static str,
    fields: FieldSpec,
    required: &'static [&'static str],
) -> VariantSpec {
    VariantSpec {
        family: ItemFamily::DownloadClient,
        name,
        implementation,
        config_contract,
        protocol: Some(protocol),
        list_type: None,
        description: "Download client.",
        fields,
        required,
        validators: &[],
    }
}

const fn indexer(
    name: &'static str,
    implementation: &'static str,
    config_contract: &'static str,
    protocol: &'static str,
    fields: FieldSpec,
    required: &'static [&'static str],
) -> VariantSpec {
    VariantSpec {
        family: ItemFamily::Indexer,
        name,
        implementation,
        config_contract,
        protocol: Some(protocol),
        list_type: None,
        description: "Indexer.",
        fields,
        required,
        validators: &[],
    }
}

const fn notification(
    name: &'static str,
    implementation: &'static str,
    config_contract: &'static str,
    fields: FieldSpec,
    required: &'static [&'static str],
    validators: &'static [(&'static str, Validator)],
) -> VariantSpec {
    VariantSpec {
        family: ItemFamily::Notification,
        name,
        implementation,
        config_contract,
        protocol: None,
        list_type: None,
        description: "Notification.",
        fields,
        required,
        validators,
    }
}

const fn import_list(
    name: &'static str,
    implementation: &'static str,
    config_contract: &'static str,
    list_type: &'static str,
    fields: FieldSpec,
    required: &'static [&'static str],
) -> VariantSpec {
    VariantSpec {
        family: ItemFamily::ImportList,
        name,
        implementation,
        config_contract,
        protocol: None,
        list_type: Some(list_type),
        description: "Import list.",
        fields,
        required,
        validators: &[],
    }
}

const fn metadata(name: &'static str, implementation: &'static str, config_contract: &'static str, fields: FieldSpec) -> VariantSpec {
    VariantSpec {
        family: ItemFamily::Metadata,
        name,
        implementation,
        config_contract,
        protocol: None,
        list_type: None,
        description: "Metadata consumer.",
        fields,
        required: &[],
        validators: &[],
    }
}

/// Fields shared by the host/port style download clients.
const fn client_fields(
    strings: &'static [&'static str],
    ints: &'static [&'static str],
    bools: &'static [&'static str],
    sensitive: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        strings,
        ints,
        bools,
        sensitive,
        ..FieldSpec::EMPTY
    }
}

const PRIORITY_RANGE: Validator = Validator::IntBetween { min: -2, max: 2 };

pub static VARIANTS: &[VariantSpec] = &[
    // Download clients.
    download_client(
        "aria2",
        "Aria2",
        "Aria2Settings",
        "torrent",
        client_fields(&["host", "rpc_path", "secret_token"], &["port"], &["use_ssl"], &["secret_token"]),
        &["host", "port"],
    ),
    download_client(
        "deluge",
        "Deluge",
        "DelugeSettings",
        "torrent",
        client_fields(
            &["host", "url_base", "password", "tv_category", "tv_imported_category"],
            &["port", "recent_tv_priority", "older_tv_priority"],
            &["use_ssl", "add_paused"],
            &["password"],
        ),
        &["host", "port"],
    ),
    download_client(
        "flood",
        "Flood",
        "FloodSettings",
        "torrent",
        FieldSpec {
            strings: &["host", "url_base", "username", "password", "destination"],
            ints: &["port"],
            bools: &["use_ssl", "add_paused"],
            int_slices: &["additional_tags"],
            string_slices: &["field_tags", "post_import_tags"],
            sensitive: &["password"],
            renames: &[("field_tags", "tags")],
            ..FieldSpec::EMPTY
        },
        &["host", "port"],
    ),
    download_client(
        "freebox",
        "TorrentFreeboxDownload",
        "FreeboxDownloadSettings",
        "torrent",
        client_fields(
            &["host", "api_url", "app_id", "app_token", "destination_directory", "category"],
            &["port", "recent_priority", "older_priority"],
            &["use_ssl", "add_paused"],
            &["app_token"],
        ),
        &["host", "port", "api_url", "app_id", "app_token"],
    ),
    download_client(
        "hadouken",
        "Hadouken",
        "HadoukenSettings",
        "torrent",
        client_fields(
            &["host", "url_base", "username", "password", "category"],
            &["port"],
            &["use_ssl"],
            &["password"],
        ),
        &["host", "port", "username", "password"],
    ),
    download_client(
        "nzbget",
        "Nzbget",
        "NzbgetSettings",
        "usenet",
        client_fields(
            &["host", "url_base", "username", "password", "tv_category"],
            &["port", "recent_tv_priority", "older_tv_priority"],
            &["use_ssl", "add_paused"],
            &["password"],
        ),
        &["host", "port"],
    ),
    download_client(
        "nzbvortex",
        "NzbVortex",
        "NzbVortexSettings",
        "usenet",
        client_fields(
            &["host", "url_base", "api_key", "tv_category"],
            &["port", "recent_tv_priority", "older_tv_priority"],
            &[],
            &["api_key"],
        ),
        &["host", "port", "api_key"],
    ),
    download_client(
        "pneumatic",
        "Pneumatic",
        "PneumaticSettings",
        "usenet",
        client_fields(&["nzb_folder", "strm_folder"], &[], &[], &[]),
        &["nzb_folder", "strm_folder"],
    ),
    download_client(
        "qbittorrent",
        "QBittorrent",
        "QBittorrentSettings",
        "torrent",
        client_fields(
            &["host", "url_base", "username", "password", "tv_category", "tv_imported_category"],
            &["port", "recent_tv_priority", "older_tv_priority", "initial_state", "content_layout"],
            &["use_ssl", "sequential_order", "first_and_last"],
            &["password"],
        ),
        &["host", "port"],
    ),
    download_client(
        "rtorrent",
        "RTorrent",
        "RTorrentSettings",
        "torrent",
        client_fields(
            &["host", "url_base", "username", "password", "tv_category", "tv_imported_category", "tv_directory"],
            &["port", "recent_tv_priority", "older_tv_priority"],
            &["use_ssl", "add_stopped"],
            &["password"],
        ),
        &["host", "port"],
    ),
    download_client(
        "sabnzbd",
        "Sabnzbd",
        "SabnzbdSettings",
        "usenet",
        client_fields(
            &["host", "url_base", "api_key", "username", "password", "tv_category"],
            &["port", "recent_tv_priority", "older_tv_priority"],
            &["use_ssl"],
            &["api_key", "password"],
        ),
        &["host", "port"],
    ),
    download_client(
        "torrent_blackhole",
        "TorrentBlackhole",
        "TorrentBlackholeSettings",
        "torrent",
        client_fields(
            &["torrent_folder", "watch_folder", "magnet_file_extension"],
            &[],
            &["save_magnet_files", "read_only"],
            &[],
        ),
        &["torrent_folder", "watch_folder"],
    ),
    download_client(
        "transmission",
        "Transmission",
        "TransmissionSettings",
        "torrent",
        client_fields(
            &["host", "url_base", "username", "password", "tv_category", "tv_directory"],
            &["port", "recent_tv_priority", "older_tv_priority"],
            &["use_ssl", "add_paused"],
            &["password"],
        ),
        &["host", "port"],
    ),
    download_client(
        "usenet_blackhole",
        "UsenetBlackhole",
        "UsenetBlackholeSettings",
        "usenet",
        client_fields(&["nzb_folder", "watch_folder"], &[], &[], &[]),
        &["nzb_folder", "watch_folder"],
    ),
    download_client(
        "utorrent",
        "UTorrent",
        "UTorrentSettings",
        "torrent",
        FieldSpec {
            strings: &["host", "url_base", "username", "password", "tv_category", "tv_imported_category"],
            ints: &["port", "recent_tv_priority", "older_tv_priority", "initial_state"],
            bools: &["use_ssl"],
            sensitive: &["password"],
            // The upstream contract spells this field without the first "i".
            renames: &[("initial_state", "intialState")],
            ..FieldSpec::EMPTY
        },
        &["host", "port"],
    ),
    download_client(
        "vuze",
        "Vuze",
        "TransmissionSettings",
        "torrent",
        client_fields(
            &["host", "url_base", "username", "password", "tv_category", "tv_directory"],
            &["port", "recent_tv_priority", "older_tv_priority"],
            &["use_ssl", "add_paused"],
            &["password"],
        ),
        &["host", "port"],
    ),
    // Indexers.
    indexer(
        "newznab",
        "Newznab",
        "NewznabSettings",
        "usenet",
        FieldSpec {
            strings: &["base_url", "api_path", "api_key", "additional_parameters"],
            bools: &["anime_standard_format_search"],
            int_slices: &["categories", "anime_categories"],
            sensitive: &["api_key"],
            ..FieldSpec::EMPTY
        },
        &["base_url"],
    ),
    indexer(
        "torznab",
        "Torznab",
        "TorznabSettings",
        "torrent",
        FieldSpec {
            strings: &["base_url", "api_path", "api_key", "additional_parameters"],
            ints: &["minimum_seeders", "seed_time", "season_pack_seed_time"],
            bools: &["anime_standard_format_search"],
            floats: &["seed_ratio"],
            int_slices: &["categories", "anime_categories"],
            sensitive: &["api_key"],
            renames: SEED_CRITERIA,
            ..FieldSpec::EMPTY
        },
        &["base_url"],
    ),
    indexer(
        "filelist",
        "FileList",
        "FileListSettings",
        "torrent",
        FieldSpec {
            strings: &["base_url", "username", "passkey"],
            ints: &["minimum_seeders", "seed_time", "season_pack_seed_time"],
            floats: &["seed_ratio"],
            int_slices: &["categories", "anime_categories"],
            sensitive: &["passkey"],
            renames: SEED_CRITERIA,
            ..FieldSpec::EMPTY
        },
        &["username", "passkey"],
    ),
    indexer(
        "hdbits",
        "HDBits",
        "HDBitsSettings",
        "torrent",
        FieldSpec {
            strings: &["base_url", "username", "api_key"],
            ints: &["minimum_seeders", "seed_time", "season_pack_seed_time"],
            floats: &["seed_ratio"],
            int_slices: &["categories", "codecs", "mediums"],
            sensitive: &["api_key"],
            renames: SEED_CRITERIA,
            ..FieldSpec::EMPTY
        },
        &["username", "api_key"],
    ),
    indexer(
        "iptorrents",
        "IPTorrents",
        "IPTorrentsSettings",
        "torrent",
        FieldSpec {
            strings: &["base_url"],
            ints: &["minimum_seeders", "seed_time", "season_pack_seed_time"],
            floats: &["seed_ratio"],
            renames: SEED_CRITERIA,
            ..FieldSpec::EMPTY
        },
        &["base_url"],
    ),
    indexer(
        "nyaa",
        "Nyaa",
        "NyaaSettings",
        "torrent",
        FieldSpec {
            strings: &["base_url", "additional_parameters"],
            ints: &["minimum_seeders", "seed_time", "season_pack_seed_time"],
            bools: &["anime_standard_format_search"],
            floats: &["seed_ratio"],
            renames: SEED_CRITERIA,
            ..FieldSpec::EMPTY
        },
        &["base_url"],
    ),
    indexer(
        "broadcasthenet",
        "BroadcastheNet",
        "BroadcastheNetSettings",
        "torrent",
        FieldSpec {
            strings: &["base_url", "api_key"],
            ints: &["minimum_seeders", "seed_time", "season_pack_seed_time"],
            floats: &["seed_ratio"],
            sensitive: &["api_key"],
            renames: SEED_CRITERIA,
            ..FieldSpec::EMPTY
        },
        &["api_key"],
    ),
    indexer(
        "torrent_rss",
        "TorrentRssIndexer",
        "TorrentRssIndexerSettings",
        "torrent",
        FieldSpec {
            strings: &["base_url", "cookie"],
            ints: &["minimum_seeders", "seed_time", "season_pack_seed_time"],
            bools: &["allow_zero_size"],
            floats: &["seed_ratio"],
            sensitive: &["cookie"],
            renames: SEED_CRITERIA,
            ..FieldSpec::EMPTY
        },
        &["base_url"],
    ),
    indexer(
        "torrentleech",
        "Torrentleech",
        "TorrentleechSettings",
        "torrent",
        FieldSpec {
            strings: &["base_url", "api_key"],
            ints: &["minimum_seeders", "seed_time", "season_pack_seed_time"],
            floats: &["seed_ratio"],
            sensitive: &["api_key"],
            renames: SEED_CRITERIA,
            ..FieldSpec::EMPTY
        },
        &["api_key"],
    ),
    // Notifications.
    notification(
        "webhook",
        "Webhook",
        "WebhookSettings",
        FieldSpec {
            strings: &["url", "username", "password"],
            ints: &["method"],
            sensitive: &["password"],
            ..FieldSpec::EMPTY
        },
        &["url", "method"],
        &[("method", Validator::OneOfInts(enums::WEBHOOK_METHODS))],
    ),
    notification(
        "discord",
        "Discord",
        "DiscordSettings",
        FieldSpec {
            strings: &["web_hook_url", "username", "avatar", "author"],
            int_slices: &["grab_fields", "import_fields", "manual_interaction_fields"],
            sensitive: &["web_hook_url"],
            ..FieldSpec::EMPTY
        },
        &["web_hook_url"],
        &[],
    ),
    notification(
        "email",
        "Email",
        "EmailSettings",
        FieldSpec {
            strings: &["server", "username", "password", "from"],
            ints: &["port", "use_encryption"],
            string_slices: &["to", "cc", "bcc"],
            sensitive: &["password"],
            ..FieldSpec::EMPTY
        },
        &["server", "from", "to"],
        &[("use_encryption", Validator::IntBetween { min: 0, max: 2 })],
    ),
    notification(
        "gotify",
        "Gotify",
        "GotifySettings",
        FieldSpec {
            strings: &["server", "app_token"],
            ints: &["priority"],
            bools: &["include_series_poster"],
            sensitive: &["app_token"],
            ..FieldSpec::EMPTY
        },
        &["server", "app_token"],
        &[("priority", Validator::OneOfInts(enums::GOTIFY_PRIORITIES))],
    ),
    notification(
        "pushover",
        "Pushover",
        "PushoverSettings",
        FieldSpec {
            strings: &["api_key", "user_key", "sound"],
            ints: &["priority", "retry", "expire"],
            string_slices: &["devices"],
            sensitive: &["api_key", "user_key"],
            ..FieldSpec::EMPTY
        },
        &["api_key", "user_key"],
        &[("priority", PRIORITY_RANGE)],
    ),
    notification(
        "telegram",
        "Telegram",
        "TelegramSettings",
        FieldSpec {
            strings: &["bot_token", "chat_id", "topic_id"],
            bools: &["send_silently"],
            sensitive: &["bot_token"],
            ..FieldSpec::EMPTY
        },
        &["bot_token", "chat_id"],
        &[],
    ),
    notification(
        "slack",
        "Slack",
        "SlackSettings",
        FieldSpec {
            strings: &["web_hook_url", "username", "icon", "channel"],
            sensitive: &["web_hook_url"],
            ..FieldSpec::EMPTY
        },
        &["web_hook_url", "username"],
        &[],
    ),
    notification(
        "custom_script",
        "CustomScript",
        "CustomScriptSettings",
        FieldSpec {
            strings: &["path", "arguments"],
            ..FieldSpec::EMPTY
        },
        &["path"],
        &[],
    ),
    notification(
        "plex",
        "PlexServer",
        "PlexServerSettings",
        FieldSpec {
            strings: &["host", "auth_token", "map_from", "map_to"],
            ints: &["port"],
            bools: &["use_ssl", "update_library"],
            sensitive: &["auth_token"],
            ..FieldSpec::EMPTY
        },
        &["host", "auth_token"],
        &[],
    ),
    notification(
        "emby",
        "MediaBrowser",
        "MediaBrowserSettings",
        FieldSpec {
            strings: &["host", "api_key", "map_from", "map_to"],
            ints: &["port"],
            bools: &["use_ssl", "notify", "update_library"],
            sensitive: &["api_key"],
            ..FieldSpec::EMPTY
        },
        &["host", "api_key"],
        &[],
    ),
    notification(
        "kodi",
        "Xbmc",
        "XbmcSettings",
        FieldSpec {
            strings: &["host", "username", "password"],
            ints: &["port", "display_time"],
            bools: &["use_ssl", "notify", "update_library", "clean_library", "always_update"],
            sensitive: &["password"],
            ..FieldSpec::EMPTY
        },
        &["host", "port"],
        &[],
    ),
    notification(
        "ntfy",
        "Ntfy",
        "NtfySettings",
        FieldSpec {
            strings: &["server_url", "access_token", "username", "password", "click_url"],
            ints: &["priority"],
            string_slices: &["topics", "field_tags"],
            sensitive: &["access_token", "password"],
            renames: &[("field_tags", "tags")],
            ..FieldSpec::EMPTY
        },
        &["topics"],
        &[("priority", Validator::IntBetween { min: 1, max: 5 })],
    ),
    notification(
        "apprise",
        "Apprise",
        "AppriseSettings",
        FieldSpec {
            strings: &["base_url", "configuration_key", "stateless_urls", "auth_username", "auth_password"],
            ints: &["notification_type"],
            string_slices: &["field_tags"],
            sensitive: &["configuration_key", "auth_password"],
            renames: &[("field_tags", "tags")],
            ..FieldSpec::EMPTY
        },
        &["base_url"],
        &[("notification_type", Validator::OneOfInts(enums::NOTIFICATION_SEVERITIES))],
    ),
    notification(
        "join",
        "Join",
        "JoinSettings",
        FieldSpec {
            strings: &["api_key", "device_names"],
            ints: &["priority"],
            sensitive: &["api_key"],
            ..FieldSpec::EMPTY
        },
        &["api_key"],
        &[("priority", PRIORITY_RANGE)],
    ),
    notification(
        "mailgun",
        "MailGun",
        "MailgunSettings",
        FieldSpec {
            strings: &["api_key", "from", "sender_domain"],
            bools: &["use_eu_endpoint"],
            string_slices: &["recipients"],
            sensitive: &["api_key"],
            ..FieldSpec::EMPTY
        },
        &["api_key", "from", "recipients"],
        &[],
    ),
    notification(
        "prowl",
        "Prowl",
        "ProwlSettings",
        FieldSpec {
            strings: &["api_key"],
            ints: &["priority"],
            sensitive: &["api_key"],
            ..FieldSpec::EMPTY
        },
        &["api_key"],
        &[("priority", PRIORITY_RANGE)],
    ),
    notification(
        "pushbullet",
        "PushBullet",
        "PushBulletSettings",
        FieldSpec {
            strings: &["api_key", "sender_id"],
            string_slices: &["channel_tags", "device_ids"],
            sensitive: &["api_key"],
            ..FieldSpec::EMPTY
        },
        &["api_key"],
        &[],
    ),
    notification(
        "sendgrid",
        "SendGrid",
        "SendGridSettings",
        FieldSpec {
            strings: &["api_key", "from"],
            string_slices: &["recipients"],
            sensitive: &["api_key"],
            ..FieldSpec::EMPTY
        },
        &["api_key", "from", "recipients"],
        &[],
    ),
    notification(
        "signal",
        "Signal",
        "SignalSettings",
        FieldSpec {
            strings: &["host", "auth_username", "auth_password", "sender_number", "receiver_id"],
            ints: &["port"],
            bools: &["use_ssl"],
            sensitive: &["auth_password"],
            ..FieldSpec::EMPTY
        },
        &["host", "port", "sender_number", "receiver_id"],
        &[],
    ),
    notification(
        "simplepush",
        "Simplepush",
        "SimplepushSettings",
        FieldSpec {
            strings: &["key", "event"],
            sensitive: &["key"],
            ..FieldSpec::EMPTY
        },
        &["key"],
        &[],
    ),
    notification(
        "synology",
        "SynologyIndexer",
        "SynologyIndexerSettings",
        FieldSpec {
            bools: &["update_library"],
            ..FieldSpec::EMPTY
        },
        &[],
        &[],
    ),
    notification(
        "trakt",
        "Trakt",
        "TraktSettings",
        FieldSpec {
            strings: &["access_token", "refresh_token", "expires", "auth_user"],
            sensitive: &["access_token", "refresh_token"],
            ..FieldSpec::EMPTY
        },
        &["access_token", "auth_user"],
        &[],
    ),
    notification(
        "notifiarr",
        "Notifiarr",
        "NotifiarrSettings",
        FieldSpec {
            strings: &["api_key"],
            sensitive: &["api_key"],
            ..FieldSpec::EMPTY
        },
        &["api_key"],
        &[],
    ),
    notification(
        "pushcut",
        "Pushcut",
        "PushcutSettings",
        FieldSpec {
            strings: &["notification_name", "api_key"],
            bools: &["time_sensitive"],
            sensitive: &["api_key"],
            ..FieldSpec::EMPTY
        },
        &["notification_name", "api_key"],
        &[],
    ),
    // Import lists.
    import_list(
        "sonarr",
        "SonarrImport",
        "SonarrSettings",
        "program",
        FieldSpec {
            strings: &["base_url", "api_key"],
            int_slices: &["quality_profile_ids", "tag_ids", "language_profile_ids"],
            sensitive: &["api_key"],
            renames: &[("quality_profile_ids", "profileIds")],
            ..FieldSpec::EMPTY
        },
        &["base_url", "api_key"],
    ),
    import_list(
        "plex",
        "PlexImport",
        "PlexListSettings",
        "plex",
        FieldSpec {
            strings: &["access_token"],
            sensitive: &["access_token"],
            ..FieldSpec::EMPTY
        },
        &["access_token"],
    ),
    import_list(
        "plex_rss",
        "PlexRssImport",
        "PlexRssImportSettings",
        "plex",
        FieldSpec {
            strings: &["url"],
            ..FieldSpec::EMPTY
        },
        &["url"],
    ),
    import_list(
        "trakt_list",
        "TraktListImport",
        "TraktListSettings",
        "trakt",
        FieldSpec {
            strings: &[
                "access_token",
                "refresh_token",
                "expires",
                "auth_user",
                "username",
                "listname",
                "trakt_additional_parameters",
            ],
            ints: &["limit"],
            sensitive: &["access_token", "refresh_token"],
            ..FieldSpec::EMPTY
        },
        &["access_token", "auth_user", "username", "listname"],
    ),
    import_list(
        "trakt_popular",
        "TraktPopularImport",
        "TraktPopularSettings",
        "trakt",
        FieldSpec {
            strings: &[
                "access_token",
                "refresh_token",
                "expires",
                "auth_user",
                "genres",
                "years",
                "rating",
                "trakt_additional_parameters",
            ],
            ints: &["limit", "trakt_list_type"],
            sensitive: &["access_token", "refresh_token"],
            ..FieldSpec::EMPTY
        },
        &["access_token", "auth_user"],
    ),
    import_list(
        "trakt_user",
        "TraktUserImport",
        "TraktUserSettings",
        "trakt",
        FieldSpec {
            strings: &["access_token", "refresh_token", "expires", "auth_user", "username", "trakt_additional_parameters"],
            ints: &["limit", "trakt_list_type", "trakt_watched_list_type", "trakt_watch_sorting"],
            sensitive: &["access_token", "refresh_token"],
            ..FieldSpec::EMPTY
        },
        &["access_token", "auth_user"],
    ),
    import_list(
        "imdb",
        "ImdbListImport",
        "ImdbSettings",
        "other",
        FieldSpec {
            strings: &["list_id"],
            ..FieldSpec::EMPTY
        },
        &["list_id"],
    ),
    import_list(
        "custom",
        "CustomImport",
        "CustomSettings",
        "advanced",
        FieldSpec {
            strings: &["base_url"],
            ..FieldSpec::EMPTY
        },
        &["base_url"],
    ),
    import_list(
        "simkl",
        "SimklUserImport",
        "SimklUserSettings",
        "simkl",
        FieldSpec {
            strings: &["access_token", "refresh_token", "expires", "auth_user"],
            ints: &["list_type", "show_type"],
            sensitive: &["access_token", "refresh_token"],
            ..FieldSpec::EMPTY
        },
        &["access_token", "auth_user"],
    ),
    import_list(
        "anilist",
        "AniListImport",
        "AniListSettings",
        "other",
        FieldSpec {
            strings: &["access_token", "refresh_token", "expires", "auth_user", "username"],
            bools: &[
                "import_watching",
                "import_planning",
                "import_completed",
                "import_dropped",
                "import_paused",
                "import_repeating",
                "import_finished",
                "import_releasing",
                "import_not_yet_released",
                "import_cancelled",
                "import_hiatus",
            ],
            sensitive: &["access_token", "refresh_token"],
            ..FieldSpec::EMPTY
        },
        &["access_token", "auth_user", "username"],
    ),
    import_list(
        "myanimelist",
        "MyAnimeListImport",
        "MALListSettings",
        "other",
        FieldSpec {
            strings: &["access_token", "refresh_token", "expires", "auth_user"],
            ints: &["list_status"],
            sensitive: &["access_token", "refresh_token"],
            ..FieldSpec::EMPTY
        },
        &["access_token", "auth_user"],
    ),
    // Metadata consumers.
    metadata(
        "kodi",
        "XbmcMetadata",
        "XbmcMetadataSettings",
        FieldSpec {
            bools: &[
                "series_metadata",
                "series_metadata_episode_guide",
                "series_metadata_url",
                "episode_metadata",
                "series_images",
                "season_images",
                "episode_images",
            ],
            ..FieldSpec::EMPTY
        },
    ),
    metadata(
        "roksbox",
        "RoksboxMetadata",
        "RoksboxMetadataSettings",
        FieldSpec {
            bools: &["episode_metadata", "series_images", "season_images", "episode_images"],
            ..FieldSpec::EMPTY
        },
    ),
    metadata(
        "wdtv",
        "WdtvMetadata",
        "WdtvMetadataSettings",
        FieldSpec {
            bools: &["episode_metadata", "series_images", "season_images", "episode_images"],
            ..FieldSpec::EMPTY
        },
    ),
    metadata(
        "emby",
        "MediaBrowserMetadata",
        "MediaBrowserMetadataSettings",
        FieldSpec {
            bools: &["series_metadata"],
            ..FieldSpec::EMPTY
        },
    ),
];
