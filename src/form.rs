//! Modal Form
//!
//! Declarative field lists per modal mode, and serialization of the rendered
//! form back to a JSON object.

use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::models::{Access, Wish, WishStatus, Wishlist};
use crate::modal::ModalContent;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Select(Vec<&'static str>),
    Hidden,
}

/// One field of the modal form
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub name: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
}

impl FieldSpec {
    fn text(id: &'static str, label: &'static str, name: &'static str, value: Option<&str>) -> Self {
        Self {
            id,
            label,
            name,
            kind: FieldKind::Text,
            value: value.unwrap_or_default().to_string(),
            required: false,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Fields shown for the entity in the modal
pub fn form_fields(content: &ModalContent) -> Vec<FieldSpec> {
    match content {
        ModalContent::Wishlist(wishlist) => wishlist_fields(wishlist.as_ref()),
        ModalContent::Wish { wish, .. } => wish_fields(wish.as_ref()),
    }
}

fn wishlist_fields(wishlist: Option<&Wishlist>) -> Vec<FieldSpec> {
    let access = wishlist.map(|w| w.access).unwrap_or_default();
    vec![
        FieldSpec::text("inputWLName", "Name", "name", wishlist.map(|w| w.name.as_str())).required(),
        FieldSpec {
            id: "selectAccess",
            label: "Access",
            name: "access",
            kind: FieldKind::Select(Access::ALL.iter().map(|a| a.as_str()).collect()),
            value: access.to_string(),
            required: false,
        },
        FieldSpec::text("inputWLComment", "Comment", "comment", wishlist.and_then(|w| w.comment.as_deref())),
    ]
}

fn wish_fields(wish: Option<&Wish>) -> Vec<FieldSpec> {
    let price = wish.and_then(|w| w.price).map(|p| p.to_string());
    let mut fields = vec![
        FieldSpec::text("inputWLName", "Name", "name", wish.map(|w| w.name.as_str())).required(),
        FieldSpec::text("inputWLink", "Link", "link", wish.and_then(|w| w.link.as_deref())),
        FieldSpec::text("inputWPrice", "Price", "price", price.as_deref()),
        FieldSpec::text("inputWLComment", "Comment", "comment", wish.and_then(|w| w.comment.as_deref())),
    ];
    if wish.is_none() {
        fields.push(FieldSpec {
            id: "inputWStatus",
            label: "",
            name: "status",
            kind: FieldKind::Hidden,
            value: WishStatus::Free.to_string(),
            required: false,
        });
    }
    fields
}

/// A rendered input or select as read back from the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: Option<String>,
    pub value: String,
}

impl FormField {
    pub fn new(name: Option<&str>, value: &str) -> Self {
        Self {
            name: name.map(str::to_string),
            value: value.to_string(),
        }
    }
}

/// JSON object of all named fields with a non-empty value
pub fn serialize_form(fields: &[FormField]) -> Value {
    let mut object = Map::new();
    for field in fields {
        let Some(name) = field.name.as_deref().filter(|n| !n.is_empty()) else {
            continue;
        };
        if field.value.is_empty() {
            continue;
        }
        object.insert(name.to_string(), Value::String(field.value.clone()));
    }
    Value::Object(object)
}

/// Collect inputs, then selects, of a rendered form
pub fn read_form(form: &HtmlFormElement) -> Vec<FormField> {
    let mut fields = Vec::new();
    for selector in ["input", "select"] {
        let Ok(nodes) = form.query_selector_all(selector) else {
            continue;
        };
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let value = if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
                input.value()
            } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
                select.value()
            } else {
                continue;
            };
            let name = node.dyn_ref::<Element>().and_then(|el| el.get_attribute("name"));
            fields.push(FormField { name, value });
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(fields: &[FieldSpec]) -> Vec<&'static str> {
        fields.iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_serialize_named_non_empty() {
        let fields = vec![
            FormField::new(Some("name"), "Birthday"),
            FormField::new(Some("comment"), ""),
            FormField::new(None, "hidden id"),
            FormField::new(Some("access"), "private"),
        ];
        assert_eq!(
            serialize_form(&fields),
            json!({"name": "Birthday", "access": "private"})
        );
    }

    #[test]
    fn test_serialize_escapes_values() {
        let fields = vec![FormField::new(Some("name"), "say \"hi\"\n")];
        let body = serialize_form(&fields).to_string();
        assert_eq!(body, r#"{"name":"say \"hi\"\n"}"#);
    }

    #[test]
    fn test_serialize_empty_form() {
        assert_eq!(serialize_form(&[]), json!({}));
    }

    #[test]
    fn test_new_wishlist_fields() {
        let fields = form_fields(&ModalContent::new_wishlist());
        assert_eq!(names(&fields), vec!["name", "access", "comment"]);
        assert!(fields[0].required);
        assert_eq!(fields[1].kind, FieldKind::Select(vec!["public", "private"]));
        assert_eq!(fields[1].value, "public");
    }

    #[test]
    fn test_existing_wishlist_fields_use_values() {
        let wishlist = Wishlist {
            id: 1,
            username: "ann".to_string(),
            name: "Birthday".to_string(),
            comment: Some("June".to_string()),
            access: Access::Private,
            wishes: Vec::new(),
        };
        let fields = form_fields(&ModalContent::Wishlist(Some(wishlist)));
        assert_eq!(fields[0].value, "Birthday");
        assert_eq!(fields[1].value, "private");
        assert_eq!(fields[2].value, "June");
    }

    #[test]
    fn test_new_wish_carries_free_status() {
        let fields = form_fields(&ModalContent::new_wish(3));
        assert_eq!(names(&fields), vec!["name", "link", "price", "comment", "status"]);
        let status = fields.last().unwrap();
        assert_eq!(status.kind, FieldKind::Hidden);
        assert_eq!(status.value, "free");
    }

    #[test]
    fn test_existing_wish_has_no_status_field() {
        let wish = Wish {
            id: 2,
            name: "Pen".to_string(),
            link: None,
            price: Some(3.5),
            status: WishStatus::Booked,
            comment: None,
        };
        let fields = form_fields(&ModalContent::Wish { wishlist_id: 3, wish: Some(wish) });
        assert_eq!(names(&fields), vec!["name", "link", "price", "comment"]);
        assert_eq!(fields[1].value, "");
        assert_eq!(fields[2].value, "3.5");
    }
}
