//! Model materialization and relation resolution through to_model
use response_transformer::prelude::*;
use serde_json::{Value, json};

struct User;

impl ApiModel for User {
    const MODEL_NAME: &'static str = "User";

    fn api_attributes() -> Vec<String> {
        vec!["name".into(), "email".into()]
    }
}

fn registry() -> ModelRegistry {
    let mut registry = ModelRegistry::new();
    registry.register_model::<User>();
    registry.register(ModelDescriptor::new("Post", ["title", "body"]));
    registry.register(ModelDescriptor::new("Comment", ["text"]));
    registry.register(ModelDescriptor::new("Company", ["name"]));
    registry.register(ModelDescriptor::new("Country", ["code"]));
    registry.register(ModelDescriptor::new("Thing", ["name"]));
    registry
}

fn one(out: Transformed<Option<Materialized>>) -> Model {
    out.into_data()
        .flatten()
        .and_then(Materialized::into_one)
        .expect("single model")
}

#[test]
fn whitelist_filters_attributes() {
    let t = ResponseTransformer::new(r#"{"name": "a", "secret": "b", "created_at": "t"}"#);
    let model = one(t.to_model(&registry(), "Thing", &RelationSpec::new()).unwrap());

    assert_eq!(model.model_type(), "Thing");
    assert_eq!(
        model.attributes().clone(),
        serde_json::from_value::<serde_json::Map<String, Value>>(json!({"name": "a", "created_at": "t"})).unwrap()
    );
    assert!(!model.has_attribute("secret"));
}

#[test]
fn unknown_model_type_fails() {
    let t = ResponseTransformer::new(r#"{"name": "a"}"#);
    let err = t.to_model(&registry(), "NoSuchType", &RelationSpec::new()).unwrap_err();
    assert_eq!(err, TransformError::ModelNotFound("NoSuchType".into()));
}

#[test]
fn unknown_relation_model_type_fails() {
    let t = ResponseTransformer::new(r#"{"title": "p", "author": {"name": "a"}}"#);
    let relations = RelationSpec::new().with("author", "Ghost");
    let err = t.to_model(&registry(), "Post", &relations).unwrap_err();
    assert!(matches!(err, TransformError::ModelNotFound(name) if name == "Ghost"));
}

#[test]
fn empty_document_yields_none() {
    for body in ["null", "[]", ""] {
        let t = ResponseTransformer::new(body);
        assert_eq!(
            t.to_model(&registry(), "User", &RelationSpec::new()).unwrap(),
            Transformed::Data(None),
            "{body}"
        );
    }
}

#[test]
fn empty_object_maps_to_model_without_attributes() {
    let t = ResponseTransformer::new("{}");
    let user = one(t.to_model(&registry(), "User", &RelationSpec::new()).unwrap());
    assert_eq!(user.model_type(), "User");
    assert!(user.attributes().is_empty());
}

#[test]
fn missing_relation_field_is_skipped() {
    let t = ResponseTransformer::new(r#"{"title": "p"}"#);
    let relations = RelationSpec::new().with("author", "User");
    let post = one(t.to_model(&registry(), "Post", &relations).unwrap());

    assert!(post.relation("author").is_none());
    assert_eq!(post.attribute("title"), Some(&json!("p")));
}

#[test]
fn leaf_and_collection_relations() {
    let t = ResponseTransformer::new(
        r#"{
            "title": "p",
            "author": {"name": "ada", "password": "x"},
            "comments": [{"text": "one"}, {"text": "two", "spam": true}]
        }"#,
    );
    let relations = RelationSpec::new()
        .with("author", "User")
        .with("comments", "Comment");
    let post = one(t.to_model(&registry(), "Post", &relations).unwrap());

    assert_eq!(post.relation_names(), vec!["author", "comments"]);
    let author = post.relation("author").and_then(Materialized::as_one).unwrap();
    assert_eq!(author.attribute("name"), Some(&json!("ada")));
    assert!(!author.has_attribute("password"));

    let comments = post.relation("comments").and_then(Materialized::as_many).unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].attribute("text"), Some(&json!("two")));
    assert!(!comments[1].has_attribute("spam"));
}

#[test]
fn nested_relations_three_levels_deep() {
    let t = ResponseTransformer::new(
        r#"{"data": {
            "title": "p",
            "author": {
                "name": "ada",
                "company": {"name": "Acme", "country": {"code": "NZ", "pop": 5}}
            }
        }}"#,
    )
    .with_envelope_key("data");
    let relations = RelationSpec::new().chain([
        ("author", "User"),
        ("company", "Company"),
        ("country", "Country"),
    ]);
    let post = one(t.to_model(&registry(), "Post", &relations).unwrap());

    let author = post.relation("author").and_then(Materialized::as_one).unwrap();
    let company = author.relation("company").and_then(Materialized::as_one).unwrap();
    let country = company.relation("country").and_then(Materialized::as_one).unwrap();
    assert_eq!(author.attribute("name"), Some(&json!("ada")));
    assert_eq!(company.attribute("name"), Some(&json!("Acme")));
    assert_eq!(country.model_type(), "Country");
    assert_eq!(country.attributes().len(), 1);
    assert_eq!(
        post.to_value(),
        json!({
            "title": "p",
            "author": {"name": "ada", "company": {"name": "Acme", "country": {"code": "NZ"}}}
        })
    );
}

#[test]
fn sibling_chains_share_the_parent_relation() {
    let t = ResponseTransformer::new(
        r#"{"title": "p", "author": {"name": "ada", "company": {"name": "Acme"}, "country": {"code": "NZ"}}}"#,
    );
    let relations = RelationSpec::new()
        .chain([("author", "User"), ("company", "Company")])
        .chain([("author", "User"), ("country", "Country")]);
    let post = one(t.to_model(&registry(), "Post", &relations).unwrap());

    let author = post.relation("author").and_then(Materialized::as_one).unwrap();
    assert_eq!(author.relation_names(), vec!["company", "country"]);
}

#[test]
fn sequence_document_maps_to_many_with_relations() {
    let t = ResponseTransformer::new(
        r#"[{"title": "a", "author": {"name": "x"}}, {"title": "b"}]"#,
    );
    let relations = RelationSpec::new().with("author", "User");
    let posts = t
        .to_model(&registry(), "Post", &relations)
        .unwrap()
        .into_data()
        .flatten()
        .and_then(|m| m.as_many().map(<[Model]>::to_vec))
        .unwrap();

    assert_eq!(posts.len(), 2);
    assert!(posts[0].relation("author").is_some());
    assert!(posts[1].relation("author").is_none());
    assert_eq!(posts[1].attribute("body"), None);
}

#[test]
fn relation_spec_from_config() {
    let relations: RelationSpec = serde_json::from_value(json!({
        "author": {"model": "User", "relations": {"company": "Company"}}
    }))
    .unwrap();
    let t = ResponseTransformer::new(r#"{"title": "p", "author": {"name": "a", "company": {"name": "c"}}}"#);
    let post = one(t.to_model(&registry(), "Post", &relations).unwrap());
    let company = post
        .relation("author")
        .and_then(Materialized::as_one)
        .and_then(|a| a.relation("company"))
        .and_then(Materialized::as_one)
        .unwrap();
    assert_eq!(company.attribute("name"), Some(&json!("c")));
}

#[test]
fn typed_deserialization_of_materialized_model() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Author {
        name: String,
    }
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Post {
        title: String,
        author: Author,
    }

    let t = ResponseTransformer::new(r#"{"title": "p", "author": {"name": "ada", "email": null}}"#);
    let post = one(
        t.to_model(&registry(), "Post", &RelationSpec::new().with("author", "User"))
            .unwrap(),
    );
    let typed: Post = post.deserialize_into().unwrap();
    assert_eq!(
        typed,
        Post {
            title: "p".into(),
            author: Author { name: "ada".into() }
        }
    );
}
