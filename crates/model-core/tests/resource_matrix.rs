use clustermgmt_json::{JsonError, JsonReader, JsonWriter};
use clustermgmt_model_core::{
    is_empty, kind_of, kinds, marshal_to_string, resource, unmarshal, unmarshal_list,
    unmarshal_list_envelope, Binding, Build, BuildError, FieldSet, Identifiable, Kinds, List,
    ListBuilder, Resource, ResourceClass,
};

// Hand-written resource whose builder can refuse to build.
#[derive(Debug, Clone, Default, PartialEq)]
struct Quota {
    fields: FieldSet,
    limit: i64,
}

#[derive(Debug, Clone, Default)]
struct QuotaBuilder {
    fields: FieldSet,
    limit: i64,
}

impl QuotaBuilder {
    fn limit(mut self, value: i64) -> Self {
        self.limit = value;
        self.fields = self.fields.with(0);
        self
    }
}

impl Build for QuotaBuilder {
    type Target = Quota;

    fn build(&self) -> Result<Quota, BuildError> {
        if self.limit < 0 {
            return Err(BuildError::Invalid {
                kind: "Quota",
                reason: format!("negative limit {}", self.limit),
            });
        }
        Ok(Quota {
            fields: self.fields,
            limit: self.limit,
        })
    }

    fn copy(self, value: Option<&Quota>) -> Self {
        match value {
            Some(quota) => QuotaBuilder {
                fields: quota.fields,
                limit: quota.limit,
            },
            None => self,
        }
    }
}

impl Binding for Quota {
    type Builder = QuotaBuilder;

    fn write_json(&self, writer: &mut JsonWriter) {
        writer.write_start_obj();
        if self.fields.contains(0) {
            writer.write_key("limit");
            writer.write_i64(self.limit);
        }
        writer.write_end_obj();
    }

    fn read_json(reader: &mut JsonReader<'_>) -> Result<Self, JsonError> {
        let mut quota = Quota::default();
        reader.read_object(|reader, key| {
            if key == "limit" {
                quota.limit = reader.read_i64()?;
                quota.fields = quota.fields.with(0);
            } else {
                reader.skip_value()?;
            }
            Ok(())
        })?;
        Ok(quota)
    }
}

impl Resource for Quota {
    const KINDS: Kinds = kinds!("Quota");
    const CLASS: ResourceClass = ResourceClass::Struct;

    fn fields(&self) -> FieldSet {
        self.fields
    }
}

resource! {
    /// Test project.
    pub class Project("Project") {
        /// Display name.
        name: string = "name",
        archived: boolean = "archived",
        weight: float = "weight",
        tags: strings = "tags",
        quota: object(Quota) = "quota",
        quotas: list(Quota) = "quotas",
        children: list(Project) = "children",
    }
}

#[test]
fn test_declared_fields_start_after_identity_bits() {
    let project = ProjectBuilder::new().name("p").build().unwrap();
    assert_eq!(project.fields(), FieldSet::EMPTY.with(3));
    let project = ProjectBuilder::new().children(None).tags(vec![]).build().unwrap();
    assert_eq!(project.fields(), FieldSet::EMPTY.with(6));
}

#[test]
fn test_nested_build_error_propagates() {
    let builder = ProjectBuilder::new()
        .name("p")
        .quota(QuotaBuilder::default().limit(-1));
    let err = builder.build().unwrap_err();
    assert_eq!(
        err,
        BuildError::Invalid {
            kind: "Quota",
            reason: "negative limit -1".to_string()
        }
    );

    let builder = ProjectBuilder::new().quotas(
        ListBuilder::new()
            .item(QuotaBuilder::default().limit(1))
            .item(QuotaBuilder::default().limit(-2)),
    );
    assert!(builder.build().is_err());
    // Clearing the failing field makes the builder usable again.
    assert!(builder.quotas(None).build().unwrap().is_empty());
}

#[test]
fn test_identity_members() {
    let project = ProjectBuilder::new()
        .id("123")
        .href("/api/projects/123")
        .link(true)
        .build()
        .unwrap();
    assert!(project.link());
    assert_eq!(project.kind(), "ProjectLink");
    assert_eq!(project.id(), "123");
    assert_eq!(project.get_href(), Some("/api/projects/123"));
    assert_eq!(
        marshal_to_string(&project),
        r#"{"kind":"ProjectLink","id":"123","href":"/api/projects/123"}"#
    );

    let back: Project = unmarshal(marshal_to_string(&project)).unwrap();
    assert_eq!(back, project);
    assert_eq!(Identifiable::kind(&back), "ProjectLink");
}

#[test]
fn test_link_alone_is_empty() {
    let project = ProjectBuilder::new().link(true).build().unwrap();
    assert!(project.is_empty());
    assert!(is_empty::<Project>(None));
    assert!(!is_empty(Some(&ProjectBuilder::new().id("1").build().unwrap())));
    assert_eq!(kind_of::<Project>(None), "ProjectNil");
    assert_eq!(kind_of(Some(&Project::default())), "Project");
    assert_eq!(project.get_id(), None);
    assert_eq!(project.id(), "");
}

#[test]
fn test_class_list_field_uses_envelope() {
    let project = ProjectBuilder::new()
        .children(ProjectListBuilder::new().item(ProjectBuilder::new().name("c")))
        .quotas(ListBuilder::new().item(QuotaBuilder::default().limit(2)))
        .build()
        .unwrap();
    assert_eq!(
        marshal_to_string(&project),
        r#"{"kind":"Project","quotas":[{"limit":2}],"children":{"kind":"ProjectList","items":[{"kind":"Project","name":"c"}]}}"#
    );
    let back: Project = unmarshal(marshal_to_string(&project)).unwrap();
    assert_eq!(back, project);
}

#[test]
fn test_list_link_envelope() {
    let json = r#"{"kind":"ProjectListLink","href":"/api/projects"}"#;
    let list: List<Project> = unmarshal_list_envelope(json).unwrap();
    assert!(list.link());
    assert_eq!(list.href(), "/api/projects");
    assert!(list.is_empty());
    assert_eq!(list.kind(), "ProjectListLink");
    assert_eq!(marshal_to_string(&list), json);

    let list: List<Project> = unmarshal_list_envelope(r#"{"kind":"ProjectList","items":[]}"#).unwrap();
    assert!(!list.link());
    assert_eq!(List::kind_of(Some(&list)), "ProjectList");
    assert_eq!(List::<Project>::kind_of(None), "ProjectListNil");

    // A nil-kind envelope is accepted as an ordinary list.
    let list: List<Project> =
        unmarshal_list_envelope(r#"{"kind":"ProjectListNil","items":[{"id":"1"}]}"#).unwrap();
    assert!(!list.link());
    assert_eq!(list.get(0).map(Project::id), Some("1"));
}

#[test]
fn test_list_reads_both_forms() {
    let bare: List<Quota> = unmarshal_list_envelope(r#"[{"limit":1}]"#).unwrap();
    let wrapped: List<Quota> =
        unmarshal_list_envelope(r#"{"kind":"QuotaList","items":[{"limit":1}],"extra":[1,{"a":2}]}"#)
            .unwrap();
    assert_eq!(bare, wrapped);
    assert_eq!(marshal_to_string(&bare), r#"[{"limit":1}]"#);

    let err = unmarshal_list_envelope::<Quota>("5").unwrap_err();
    assert!(matches!(err, JsonError::UnexpectedToken { .. }), "{err}");
}

#[test]
fn test_struct_list_with_href_keeps_envelope() {
    let list = ListBuilder::new()
        .href("/api/quotas")
        .item(QuotaBuilder::default().limit(3))
        .build()
        .unwrap();
    assert_eq!(
        marshal_to_string(&list),
        r#"{"kind":"QuotaList","href":"/api/quotas","items":[{"limit":3}]}"#
    );
    assert_eq!(unmarshal::<List<Quota>>(marshal_to_string(&list)).unwrap(), list);
}

#[test]
fn test_unmarshal_list_requires_array() {
    let items: Vec<Quota> = unmarshal_list("[]").unwrap();
    assert!(items.is_empty());
    assert!(unmarshal_list::<Quota>(r#"{"items":[]}"#).is_err());
}

#[test]
fn test_to_builder_round_trip() {
    let project = ProjectBuilder::new()
        .name("p")
        .weight(0.5)
        .archived(false)
        .tags(vec!["a".to_string()])
        .quota(QuotaBuilder::default().limit(9))
        .build()
        .unwrap();
    assert_eq!(project.to_builder().build().unwrap(), project);
    assert_eq!(project.get_archived(), Some(false));
    assert_eq!(project.quota().map(|quota| quota.limit), Some(9));
    assert_eq!(Project::CLASS, ResourceClass::Class);
    assert_eq!(Project::KINDS.list, "ProjectList");
}
