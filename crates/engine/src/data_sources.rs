//! Read-only data sources.
//!
//! Lookups and listings are generic over a [`Collection`]: anything that can
//! list its upstream entities as resource-shaped state. Singleton views,
//! system status and the condition builders have handlers of their own.

use std::marker::PhantomData;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use sonarr_api::{SonarrClient, models, paths};
use sonarr_registry::{ItemFamily, data_sources as schemas};
use sonarr_types::{AttrValue, Context, Diagnostics, ErrorKind, ProviderData, Schema, State};
use sonarr_util::{attributes_hash, scalar_to_string};
use tracing::debug;

use crate::entity::{RestEntity, SINGLETON_ID, list_states, wire_to_state};
use crate::errors::{HandlerError, data_source_error, not_found};
use crate::handler::{ClientSlot, DataSource, Response};
use crate::items::{FamilyWire, family_path, project, wire_document};
use crate::resources::{
    AutoTagEntity, CustomFormatEntity, DelayProfileEntity, DownloadClientConfigEntity, HostEntity,
    ImportListExclusionEntity, IndexerConfigEntity, MediaManagementEntity, NamingEntity, QualityDefinitionEntity,
    QualityProfileEntity, ReleaseProfileEntity, RemotePathMappingEntity, RootFolderEntity, SeriesEntity, TagEntity,
};

/// An upstream collection listed as resource-shaped state.
#[async_trait]
pub trait Collection: Send + Sync + 'static {
    /// Shape of one element.
    fn element(&self) -> Schema;

    async fn list(&self, client: &SonarrClient, ctx: &Context) -> Result<Vec<State>, HandlerError>;
}

/// Entities served by a resource of the same shape.
pub struct Entities<E>(PhantomData<fn() -> E>);

impl<E> Default for Entities<E> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[async_trait]
impl<E: RestEntity> Collection for Entities<E> {
    fn element(&self) -> Schema {
        E::schema()
    }

    async fn list(&self, client: &SonarrClient, ctx: &Context) -> Result<Vec<State>, HandlerError> {
        list_states::<E>(client, ctx, &E::schema()).await
    }
}

/// Every item of a provider-item family, with its generic attributes only.
pub struct Items<W>(PhantomData<fn() -> W>);

impl<W> Default for Items<W> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[async_trait]
impl<W: FamilyWire> Collection for Items<W> {
    fn element(&self) -> Schema {
        schemas::family_item(W::FAMILY)
    }

    async fn list(&self, client: &SonarrClient, ctx: &Context) -> Result<Vec<State>, HandlerError> {
        let schema = self.element();
        let items: Vec<W> = client.list_json(ctx, family_path(W::FAMILY), &[]).await?;
        items
            .iter()
            .map(|item| Ok(State::from_json_map(&project(&wire_document(item)?, &schema), &schema)?))
            .collect()
    }
}

#[derive(Default)]
pub struct Languages;

#[async_trait]
impl Collection for Languages {
    fn element(&self) -> Schema {
        schemas::language()
    }

    async fn list(&self, client: &SonarrClient, ctx: &Context) -> Result<Vec<State>, HandlerError> {
        let schema = self.element();
        let languages: Vec<models::Language> = client.list_json(ctx, paths::LANGUAGE, &[]).await?;
        languages
            .iter()
            .map(|language| Ok(State::from_json_map(&project(&wire_document(language)?, &schema), &schema)?))
            .collect()
    }
}

fn invalid(config: &Schema, state: &State) -> Option<Response> {
    let diags = config.validate(state);
    diags.has_error().then(|| Response::failed(None, diags))
}

fn failed(entity: &str, err: &HandlerError) -> Response {
    let mut diags = Diagnostics::new();
    diags.push(data_source_error(entity, err));
    Response::failed(None, diags)
}

/// Render a lookup key for messages: strings bare, numbers in decimal.
fn display(value: &AttrValue) -> String {
    scalar_to_string(&value.to_json()).unwrap_or_default()
}

/// Single element of a collection, found by one natural key.
pub struct Lookup<C: Collection> {
    entity: String,
    key: &'static str,
    collection: C,
    schema: Schema,
    client: ClientSlot,
}

impl<C: Collection + Default> Lookup<C> {
    pub fn new(entity: impl Into<String>, key: &'static str) -> Self {
        let collection = C::default();
        let schema = schemas::lookup(&collection.element(), key);
        Self {
            entity: entity.into(),
            key,
            collection,
            schema,
            client: ClientSlot::default(),
        }
    }
}

#[async_trait]
impl<C: Collection> DataSource for Lookup<C> {
    fn entity(&self) -> &str {
        &self.entity
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    fn configure(&mut self, data: Option<&ProviderData>) -> Diagnostics {
        self.client
            .configure(data, ErrorKind::UnexpectedDataSourceConfigureType, &self.entity)
    }

    async fn read(&self, ctx: &Context, config: &State) -> Response {
        if let Some(invalid) = invalid(&self.schema, config) {
            return invalid;
        }
        let wanted = config.get(self.key);
        let result = async {
            let client = self.client.get()?;
            let states = self.collection.list(client, ctx).await?;
            Ok::<_, HandlerError>(states.into_iter().find(|state| state.get(self.key) == wanted))
        }
        .await;
        match result {
            Ok(Some(state)) => Response::state(state),
            Ok(None) => {
                let mut diags = Diagnostics::new();
                diags.push(not_found(&self.entity, self.key, &display(wanted)));
                Response::failed(None, diags)
            }
            Err(err) => failed(&self.entity, &err),
        }
    }
}

/// Every element of a collection, under a synthetic id equal to the listing name.
pub struct Listing<C: Collection> {
    plural: &'static str,
    collection: C,
    schema: Schema,
    client: ClientSlot,
}

impl<C: Collection + Default> Listing<C> {
    pub fn new(plural: &'static str) -> Self {
        let collection = C::default();
        let schema = schemas::listing(plural, &collection.element());
        Self {
            plural,
            collection,
            schema,
            client: ClientSlot::default(),
        }
    }
}

fn as_object(state: State) -> AttrValue {
    AttrValue::Object(
        state
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect::<IndexMap<_, _>>(),
    )
}

#[async_trait]
impl<C: Collection> DataSource for Listing<C> {
    fn entity(&self) -> &str {
        self.plural
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    fn configure(&mut self, data: Option<&ProviderData>) -> Diagnostics {
        self.client
            .configure(data, ErrorKind::UnexpectedDataSourceConfigureType, self.plural)
    }

    async fn read(&self, ctx: &Context, _config: &State) -> Response {
        let result = async {
            let client = self.client.get()?;
            self.collection.list(client, ctx).await
        }
        .await;
        match result {
            Ok(states) => {
                debug!(entity = self.plural, count = states.len(), "listed");
                let mut state = State::new();
                state.set("id", self.plural);
                state.set(self.plural, AttrValue::Set(states.into_iter().map(as_object).collect()));
                Response::state(state)
            }
            Err(err) => failed(self.plural, &err),
        }
    }
}

/// Read-only view of a configuration singleton.
pub struct SingletonView<E: RestEntity> {
    schema: Schema,
    client: ClientSlot,
    entity: PhantomData<fn() -> E>,
}

impl<E: RestEntity> Default for SingletonView<E> {
    fn default() -> Self {
        Self {
            schema: E::schema().data_source_view(),
            client: ClientSlot::default(),
            entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: RestEntity> DataSource for SingletonView<E> {
    fn entity(&self) -> &str {
        E::NAME
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    fn configure(&mut self, data: Option<&ProviderData>) -> Diagnostics {
        self.client
            .configure(data, ErrorKind::UnexpectedDataSourceConfigureType, E::NAME)
    }

    async fn read(&self, ctx: &Context, _config: &State) -> Response {
        let result = async {
            let client = self.client.get()?;
            let wire: E::Wire = client.get_json(ctx, E::PATH, &[]).await?;
            wire_to_state::<E>(wire, &self.schema, &State::new())
        }
        .await;
        match result {
            Ok(state) => Response::state(state),
            Err(err) => failed(E::NAME, &err),
        }
    }
}

pub struct SystemStatusSource {
    schema: Schema,
    client: ClientSlot,
}

impl Default for SystemStatusSource {
    fn default() -> Self {
        Self {
            schema: schemas::system_status(),
            client: ClientSlot::default(),
        }
    }
}

#[async_trait]
impl DataSource for SystemStatusSource {
    fn entity(&self) -> &str {
        "system_status"
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    fn configure(&mut self, data: Option<&ProviderData>) -> Diagnostics {
        self.client
            .configure(data, ErrorKind::UnexpectedDataSourceConfigureType, "system_status")
    }

    async fn read(&self, ctx: &Context, _config: &State) -> Response {
        let result = async {
            let client = self.client.get()?;
            let status: models::SystemStatus = client.get_json(ctx, paths::SYSTEM_STATUS, &[]).await?;
            let mut record = project(&wire_document(&status)?, &self.schema);
            record.insert("id".into(), SINGLETON_ID.into());
            Ok::<_, HandlerError>(State::from_json_map(&record, &self.schema)?)
        }
        .await;
        match result {
            Ok(state) => Response::state(state),
            Err(err) => failed("system_status", &err),
        }
    }
}

/// Builds one auto-tag or custom-format condition without calling upstream.
///
/// The id is a hash of the other attributes, so identical conditions share it.
pub struct ConditionSource {
    entity: &'static str,
    schema: Schema,
}

impl ConditionSource {
    pub fn custom_format() -> Self {
        Self {
            entity: "custom_format_condition",
            schema: schemas::custom_format_condition(),
        }
    }

    pub fn auto_tag() -> Self {
        Self {
            entity: "auto_tag_condition",
            schema: schemas::auto_tag_condition(),
        }
    }
}

#[async_trait]
impl DataSource for ConditionSource {
    fn entity(&self) -> &str {
        self.entity
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    fn configure(&mut self, _data: Option<&ProviderData>) -> Diagnostics {
        Diagnostics::new()
    }

    async fn read(&self, _ctx: &Context, config: &State) -> Response {
        if let Some(invalid) = invalid(&self.schema, config) {
            return invalid;
        }
        let attributes: Map<String, Value> = self
            .schema
            .attributes
            .keys()
            .filter(|name| *name != "id")
            .map(|name| (name.clone(), config.get(name).to_record_json()))
            .collect();
        let mut state = State::new();
        for name in self.schema.attributes.keys() {
            state.set(name.clone(), config.get(name).clone());
        }
        state.set("id", attributes_hash(&attributes));
        Response::state(state)
    }
}

fn boxed<D: DataSource + 'static>(source: D) -> Box<dyn DataSource> {
    Box::new(source)
}

fn family<W: FamilyWire>(sources: &mut Vec<Box<dyn DataSource>>) {
    let family: ItemFamily = W::FAMILY;
    sources.push(boxed(Lookup::<Items<W>>::new(family.name(), "name")));
    sources.push(boxed(Listing::<Items<W>>::new(family.plural())));
}

/// Every data source the provider serves.
pub fn all() -> Vec<Box<dyn DataSource>> {
    let mut sources = vec![
        boxed(Lookup::<Entities<TagEntity>>::new("tag", "label")),
        boxed(Listing::<Entities<TagEntity>>::new("tags")),
        boxed(Lookup::<Entities<RootFolderEntity>>::new("root_folder", "path")),
        boxed(Listing::<Entities<RootFolderEntity>>::new("root_folders")),
        boxed(Lookup::<Entities<DelayProfileEntity>>::new("delay_profile", "id")),
        boxed(Listing::<Entities<DelayProfileEntity>>::new("delay_profiles")),
        boxed(Lookup::<Entities<QualityProfileEntity>>::new("quality_profile", "name")),
        boxed(Listing::<Entities<QualityProfileEntity>>::new("quality_profiles")),
        boxed(Lookup::<Entities<QualityDefinitionEntity>>::new("quality_definition", "id")),
        boxed(Listing::<Entities<QualityDefinitionEntity>>::new("quality_definitions")),
        boxed(Lookup::<Entities<ReleaseProfileEntity>>::new("release_profile", "name")),
        boxed(Listing::<Entities<ReleaseProfileEntity>>::new("release_profiles")),
        boxed(Lookup::<Entities<RemotePathMappingEntity>>::new("remote_path_mapping", "id")),
        boxed(Listing::<Entities<RemotePathMappingEntity>>::new("remote_path_mappings")),
        boxed(Lookup::<Entities<SeriesEntity>>::new("series", "title")),
        boxed(Listing::<Entities<SeriesEntity>>::new("all_series")),
        boxed(Lookup::<Entities<AutoTagEntity>>::new("auto_tag", "name")),
        boxed(Listing::<Entities<AutoTagEntity>>::new("auto_tags")),
        boxed(Lookup::<Entities<CustomFormatEntity>>::new("custom_format", "name")),
        boxed(Listing::<Entities<CustomFormatEntity>>::new("custom_formats")),
        boxed(Lookup::<Entities<ImportListExclusionEntity>>::new("import_list_exclusion", "tvdb_id")),
        boxed(Listing::<Entities<ImportListExclusionEntity>>::new("import_list_exclusions")),
        boxed(SingletonView::<NamingEntity>::default()),
        boxed(SingletonView::<MediaManagementEntity>::default()),
        boxed(SingletonView::<HostEntity>::default()),
        boxed(SingletonView::<DownloadClientConfigEntity>::default()),
        boxed(SingletonView::<IndexerConfigEntity>::default()),
        boxed(SystemStatusSource::default()),
        boxed(Lookup::<Languages>::new("language", "name")),
        boxed(Listing::<Languages>::new("languages")),
        boxed(ConditionSource::custom_format()),
        boxed(ConditionSource::auto_tag()),
    ];
    family::<models::DownloadClient>(&mut sources);
    family::<models::Indexer>(&mut sources);
    family::<models::Notification>(&mut sources);
    family::<models::ImportList>(&mut sources);
    family::<models::Metadata>(&mut sources);
    sources
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[tokio::test]
    async fn conditions_hash_their_inputs() {
        let source = ConditionSource::custom_format();
        let mut config = State::new();
        config.set("name", "hdr");
        config.set("implementation", "ReleaseTitleSpecification");
        config.set("negate", false);
        config.set("required", true);
        config.set("value", r"\bHDR\b");

        let first = source.read(&Context::new(), &config).await;
        let second = source.read(&Context::new(), &config).await;
        let first = first.state.unwrap();
        assert!(first.id().is_some());
        assert_eq!(first.id(), second.state.unwrap().id());
        assert_eq!(first.get("value").as_str(), Some(r"\bHDR\b"));

        config.set("negate", true);
        let third = source.read(&Context::new(), &config).await.state.unwrap();
        assert_ne!(first.id(), third.id());
    }

    #[tokio::test]
    async fn conditions_validate_the_implementation() {
        let source = ConditionSource::auto_tag();
        let mut config = State::new();
        config.set("name", "x");
        config.set("implementation", "NoSuchSpecification");
        config.set("negate", false);
        config.set("required", false);
        let response = source.read(&Context::new(), &config).await;
        assert!(response.state.is_none());
        assert!(response.diagnostics.has_error());
    }

    #[test]
    fn data_source_names_are_unique() {
        let sources = all();
        let names: HashSet<_> = sources.iter().map(|source| source.entity().to_string()).collect();
        assert_eq!(names.len(), sources.len());
        for name in ["tag", "tags", "all_series", "metadata_consumers", "download_client", "host", "language"] {
            assert!(names.contains(name), "missing {name}");
        }
    }

    #[tokio::test]
    async fn unconfigured_reads_report_a_client_error() {
        let source = Listing::<Entities<TagEntity>>::new("tags");
        let response = source.read(&Context::new(), &State::new()).await;
        let diag = response.diagnostics.errors().next().unwrap();
        assert_eq!(diag.kind, Some(ErrorKind::Client));
    }
}
