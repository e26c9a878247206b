use docket_core::builders::{
    ParameterSpecificationContext, ParameterSpecificationProvider,
    RootParameterSpecificationProvider,
};
use docket_core::oas::{EncodingStyle, HeaderStyle};
use docket_core::service::{
    CollectionFormat, ModelSpecification, ParameterStyle, ParameterType, ScalarType,
    SimpleParameterSpecification,
};
use docket_core::spi::{OperationBuilderPlugin, OperationContext, Plugin};
use docket_core::{
    AppError, ApiSource, DocsProperties, Docket, DocumentationPluginsBootstrapper,
    DocumentationPluginsManager, DocumentationType, Extension, OpenApiDocumentService, Plugins,
    ServiceModelToOpenApiMapper, StyleEnumMapper, TransformationFilters,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const PETSTORE: &str = r#"
handlers:
  - name: findPets
    resource: PetController
    patterns: ["/pets"]
    methods: [GET]
    parameters:
      - name: tags
        in: query
        model:
          collection:
            items:
              scalar: string
      - name: limit
        in: query
        model:
          scalar: integer
  - name: getPet
    resource: PetController
    patterns: ["/pets/{id}"]
    methods: [GET]
    parameters:
      - name: id
        in: path
        model:
          scalar: long
  - name: getOrder
    resource: StoreController
    patterns: ["/store/orders/{orderId}"]
    methods: [GET]
"#;

const LOCATIONS: [ParameterType; 4] = [
    ParameterType::Query,
    ParameterType::Header,
    ParameterType::Path,
    ParameterType::Cookie,
];

const STYLES: [Option<ParameterStyle>; 9] = [
    None,
    Some(ParameterStyle::Default),
    Some(ParameterStyle::Simple),
    Some(ParameterStyle::Matrix),
    Some(ParameterStyle::Label),
    Some(ParameterStyle::Form),
    Some(ParameterStyle::SpaceDelimited),
    Some(ParameterStyle::PipeDelimited),
    Some(ParameterStyle::DeepObject),
];

fn source() -> ApiSource {
    ApiSource::from_yaml_str(PETSTORE).unwrap()
}

fn service_with(plugins: Plugins, dockets: Vec<Docket>) -> OpenApiDocumentService {
    let manager = DocumentationPluginsManager::new(Arc::new(plugins));
    let cache = DocumentationPluginsBootstrapper::new(manager, source().handlers)
        .bootstrap(dockets)
        .unwrap();
    OpenApiDocumentService::new(&cache, TransformationFilters::builtin()).unwrap()
}

fn resolve(
    in_: ParameterType,
    model: ModelSpecification,
    style: Option<ParameterStyle>,
    explode: Option<bool>,
) -> SimpleParameterSpecification {
    let context = ParameterSpecificationContext {
        name: "p".into(),
        in_,
        simple: SimpleParameterSpecification {
            model: Some(model),
            style,
            explode,
            ..Default::default()
        },
        content: None,
    };
    RootParameterSpecificationProvider
        .create(&context)
        .query
        .unwrap()
}

#[test]
fn test_scalar_parameters_never_get_a_collection_format() {
    for in_ in LOCATIONS {
        for style in STYLES {
            for explode in [None, Some(true), Some(false)] {
                let scalar = ModelSpecification::scalar(ScalarType::String);
                let resolved = resolve(in_, scalar, style, explode);
                assert_eq!(resolved.collection_format, None, "{in_:?} {style:?} {explode:?}");
            }
        }
    }
}

#[test]
fn test_collection_format_follows_effective_explode() {
    let list = ModelSpecification::list_of(ModelSpecification::scalar(ScalarType::Integer));
    for in_ in LOCATIONS {
        for style in STYLES {
            for explode in [None, Some(true), Some(false)] {
                let resolved = resolve(in_, list.clone(), style, explode);
                let expected = if resolved.null_safe_is_explode() {
                    CollectionFormat::Multi
                } else {
                    CollectionFormat::Csv
                };
                assert_eq!(
                    resolved.collection_format,
                    Some(expected),
                    "{in_:?} {style:?} {explode:?}"
                );
            }
        }
    }
}

#[test]
fn test_cookie_parameters_always_resolve_to_form() {
    let models = [
        ModelSpecification::scalar(ScalarType::String),
        ModelSpecification::list_of(ModelSpecification::scalar(ScalarType::String)),
    ];
    for model in models {
        for style in STYLES {
            let resolved = resolve(ParameterType::Cookie, model.clone(), style, None);
            assert_eq!(resolved.style, Some(ParameterStyle::Form));
        }
    }
}

#[test]
fn test_style_mappings_are_dual() {
    let styles = StyleEnumMapper;
    for style in STYLES.into_iter().flatten() {
        let header = styles.header_style(Some(style));
        let encoding = styles.encoding_style(Some(style));
        match style {
            ParameterStyle::Simple => {
                assert_eq!(header, Some(HeaderStyle::Simple));
                assert_eq!(encoding, None);
            }
            ParameterStyle::Default
            | ParameterStyle::Matrix
            | ParameterStyle::Label
            | ParameterStyle::Form => {
                assert_eq!((header, encoding), (None, None));
            }
            ParameterStyle::SpaceDelimited => {
                assert_eq!((header, encoding), (None, Some(EncodingStyle::SpaceDelimited)))
            }
            ParameterStyle::PipeDelimited => {
                assert_eq!((header, encoding), (None, Some(EncodingStyle::PipeDelimited)))
            }
            ParameterStyle::DeepObject => {
                assert_eq!((header, encoding), (None, Some(EncodingStyle::DeepObject)))
            }
        }
    }
}

#[test]
fn test_mapping_twice_gives_identical_documents() {
    let manager = DocumentationPluginsManager::new(Arc::new(Plugins::builtin()));
    let cache = DocumentationPluginsBootstrapper::new(manager, source().handlers)
        .bootstrap(vec![])
        .unwrap();
    let documentation = cache.documentation_by_group("default").unwrap();
    let mapper = ServiceModelToOpenApiMapper::new();
    let first = mapper.map_documentation(documentation).unwrap();
    let second = mapper.map_documentation(documentation).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[derive(Debug)]
struct Summary(&'static str);

impl Plugin for Summary {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for Summary {
    fn apply(&self, context: &mut OperationContext<'_>) {
        context.operation_builder().summary(Some(self.0.to_string()));
    }
}

#[derive(Debug)]
struct Deprecate;

impl Plugin for Deprecate {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for Deprecate {
    fn apply(&self, context: &mut OperationContext<'_>) {
        context.operation_builder().deprecated(Some(true));
    }
}

fn find_pets(extensions: Vec<Extension>) -> docket_core::oas::Operation {
    let plugins = Plugins::builder().with_builtins().register_all(extensions).build();
    let spec = service_with(plugins, vec![]).specification(None, None).unwrap();
    let paths = spec.paths.as_ref().unwrap();
    paths.items["/pets"].get.clone().unwrap()
}

#[test]
fn test_same_field_writers_are_last_write_wins() {
    let first = find_pets(vec![
        Extension::OperationBuilder(Arc::new(Summary("one"))),
        Extension::OperationBuilder(Arc::new(Summary("two"))),
    ]);
    let second = find_pets(vec![
        Extension::OperationBuilder(Arc::new(Summary("two"))),
        Extension::OperationBuilder(Arc::new(Summary("one"))),
    ]);
    assert_eq!(first.summary.as_deref(), Some("two"));
    assert_eq!(second.summary.as_deref(), Some("one"));
}

#[test]
fn test_disjoint_writers_commute() {
    let first = find_pets(vec![
        Extension::OperationBuilder(Arc::new(Summary("one"))),
        Extension::OperationBuilder(Arc::new(Deprecate)),
    ]);
    let second = find_pets(vec![
        Extension::OperationBuilder(Arc::new(Deprecate)),
        Extension::OperationBuilder(Arc::new(Summary("one"))),
    ]);
    assert_eq!(first, second);
    assert_eq!(first.deprecated, Some(true));
}

#[test]
fn test_forwarded_prefix_rewrites_paths_only() {
    let service = docket_core::document_service(source(), DocsProperties::default()).unwrap();
    let original = service.specification(None, None).unwrap();
    let request = HashMap::from([("X-Forwarded-Prefix".to_string(), "/gw".to_string())]);
    let prefixed = service
        .specification(None, Some(&request as &dyn docket_core::RequestContext))
        .unwrap();

    let original_paths = original.paths.as_ref().unwrap();
    let prefixed_paths = prefixed.paths.as_ref().unwrap();
    let keys: Vec<_> = prefixed_paths.items.keys().cloned().collect();
    let expected: Vec<_> = original_paths.items.keys().map(|k| format!("/gw{k}")).collect();
    assert_eq!(keys, expected);
    for (path, item) in &original_paths.items {
        assert_eq!(&prefixed_paths.items[&format!("/gw{path}")], item);
    }
    assert_eq!(prefixed.info, original.info);
    assert_eq!(prefixed.tags, original.tags);
    assert_eq!(prefixed.components, original.components);
    assert!(Arc::ptr_eq(&service.specification(None, None).unwrap(), &original));
}

#[test]
fn test_no_dockets_falls_back_to_one_default() {
    let manager = DocumentationPluginsManager::new(Arc::new(Plugins::builtin()));
    let dockets = manager.documentation_plugins(vec![]).unwrap();
    assert_eq!(dockets, vec![Docket::new(DocumentationType::Oas30)]);
    assert_eq!(dockets[0].get_group_name(), "default");
}

#[derive(Debug, Default)]
struct Counter(AtomicUsize);

impl Plugin for Counter {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for Counter {
    fn apply(&self, _context: &mut OperationContext<'_>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_duplicate_groups_fail_before_any_operation_is_built() {
    let counter = Arc::new(Counter::default());
    let plugins = Plugins::builder()
        .with_builtins()
        .register(Extension::OperationBuilder(counter.clone()))
        .build();
    let manager = DocumentationPluginsManager::new(Arc::new(plugins));
    let result = DocumentationPluginsBootstrapper::new(manager, source().handlers).bootstrap(vec![
        Docket::new(DocumentationType::Oas30).group_name("pets"),
        Docket::new(DocumentationType::Oas30).group_name("store"),
        Docket::new(DocumentationType::Oas30).group_name("pets"),
    ]);
    assert!(matches!(result, Err(AppError::DuplicateGroups(groups)) if groups == vec!["pets".to_string()]));
    assert_eq!(counter.0.load(Ordering::SeqCst), 0);
}

#[test]
fn test_groups_select_their_paths() {
    let properties = DocsProperties::from_yaml_str(
        "groups:\n  - group: store\n    paths: \"^/store/.*\"\n  - group: pets\n    paths: \"^/pets.*\"\n",
    )
    .unwrap();
    let service = docket_core::document_service(source(), properties).unwrap();
    assert_eq!(service.groups().collect::<Vec<_>>(), vec!["store", "pets"]);
    let store = service.specification(Some("store"), None).unwrap();
    let paths: Vec<_> = store.paths.as_ref().unwrap().items.keys().cloned().collect();
    assert_eq!(paths, vec!["/store/orders/{orderId}"]);
    assert!(matches!(
        service.specification(None, None),
        Err(AppError::UnknownGroup(_))
    ));
}

#[test]
fn test_configured_parameters_are_required_strings() {
    let properties =
        DocsProperties::from_yaml_str("parameters:\n  - name: X-Token\n    in: header\n").unwrap();
    let service = docket_core::document_service(source(), properties).unwrap();
    let spec = service.specification(None, None).unwrap();
    let value = serde_json::to_value(&*spec).unwrap();
    let parameters = value["paths"]["/pets"]["get"]["parameters"].as_array().unwrap();
    let token = parameters.iter().find(|p| p["name"] == "X-Token").unwrap();
    assert_eq!(token["in"], "header");
    assert_eq!(token["required"], true);
    assert_eq!(token["schema"], serde_json::json!({ "type": "string" }));
    assert_eq!(token.get("allowEmptyValue"), None);
}

#[test]
fn test_handler_defaults_reach_the_document() {
    let yaml = r#"{"handlers": [{"name": "list", "resource": "R", "patterns": ["/items"],
        "methods": ["GET"], "parameters": [{"name": "limit", "in": "query",
        "model": {"scalar": "integer"}, "default_value": "25"}]}]}"#;
    let source = ApiSource::from_yaml_str(yaml).unwrap();
    let service = docket_core::document_service(source, DocsProperties::default()).unwrap();
    let value = serde_json::to_value(&*service.specification(None, None).unwrap()).unwrap();
    let limit = &value["paths"]["/items"]["get"]["parameters"][0];
    assert_eq!(
        limit["schema"],
        serde_json::json!({ "type": "integer", "format": "int32", "default": 25 })
    );
}
