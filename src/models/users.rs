//! Users and the payloads used to read and create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{Error, Result, ValidationError},
    models::roles::RolesType,
    nullable::Nullable,
    record::{HasUnparsed, Record, Schema},
    string_enum, EnumCheck,
};

string_enum! {
    /// Users resource type.
    pub enum UsersType {
        Users => "users",
    }
}

string_enum! {
    /// Organizations resource type.
    pub enum OrganizationsType {
        Orgs => "orgs",
    }
}

/// Attributes of a user object returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub title: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl Schema for UserAttributes {
    const NAME: &'static str = "UserAttributes";
    const FIELDS: &'static [&'static str] = &[
        "created_at",
        "disabled",
        "email",
        "handle",
        "icon",
        "modified_at",
        "name",
        "service_account",
        "status",
        "title",
        "verified",
    ];
}

/// A role reference inside a relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToRoleData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RolesType>,
}

impl RelationshipToRoleData {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            kind: Some(RolesType::Roles),
        }
    }
}

impl Schema for RelationshipToRoleData {
    const NAME: &'static str = "RelationshipToRoleData";
    const FIELDS: &'static [&'static str] = &["id", "type"];

    fn has_invalid_enum(&self) -> bool {
        self.kind.is_invalid()
    }
}

/// Relationship to a list of roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToRoles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Record<RelationshipToRoleData>>>,
}

impl Schema for RelationshipToRoles {
    const NAME: &'static str = "RelationshipToRoles";
    const FIELDS: &'static [&'static str] = &["data"];

    fn has_unparsed_child(&self) -> bool {
        self.data.has_unparsed()
    }
}

/// An organization reference inside a relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToOrganizationData {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OrganizationsType,
}

impl Schema for RelationshipToOrganizationData {
    const NAME: &'static str = "RelationshipToOrganizationData";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "type"];
    const FIELDS: &'static [&'static str] = &["id", "type"];

    fn has_invalid_enum(&self) -> bool {
        self.kind.is_invalid()
    }
}

/// Relationship to an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToOrganization {
    pub data: Record<RelationshipToOrganizationData>,
}

impl Schema for RelationshipToOrganization {
    const NAME: &'static str = "RelationshipToOrganization";
    const REQUIRED_FIELDS: &'static [&'static str] = &["data"];
    const FIELDS: &'static [&'static str] = &["data"];

    fn has_unparsed_child(&self) -> bool {
        self.data.has_unparsed()
    }
}

/// Relationships of a user object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRelationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<Record<RelationshipToOrganization>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Record<RelationshipToRoles>>,
}

impl Schema for UserRelationships {
    const NAME: &'static str = "UserRelationships";
    const FIELDS: &'static [&'static str] = &["org", "roles"];

    fn has_unparsed_child(&self) -> bool {
        self.org.has_unparsed() || self.roles.has_unparsed()
    }
}

/// User object returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: UsersType,
    pub attributes: Record<UserAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Record<UserRelationships>>,
}

impl User {
    pub fn new(id: impl Into<String>, attributes: UserAttributes) -> Self {
        Self {
            id: id.into(),
            kind: UsersType::Users,
            attributes: Record::new(attributes),
            relationships: None,
        }
    }
}

impl Schema for User {
    const NAME: &'static str = "User";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "type", "attributes"];
    const FIELDS: &'static [&'static str] = &["id", "type", "attributes", "relationships"];

    fn has_invalid_enum(&self) -> bool {
        self.kind.is_invalid()
    }

    fn has_unparsed_child(&self) -> bool {
        self.attributes.has_unparsed() || self.relationships.has_unparsed()
    }
}

/// Response containing a single user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Record<User>>,
}

impl Schema for UserResponse {
    const NAME: &'static str = "UserResponse";
    const FIELDS: &'static [&'static str] = &["data"];

    fn has_unparsed_child(&self) -> bool {
        self.data.has_unparsed()
    }
}

/// Response containing a page of users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Record<User>>>,
}

impl Schema for UsersResponse {
    const NAME: &'static str = "UsersResponse";
    const FIELDS: &'static [&'static str] = &["data"];

    fn has_unparsed_child(&self) -> bool {
        self.data.has_unparsed()
    }
}

/// Attributes sent when creating a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCreateAttributes {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl UserCreateAttributes {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            title: None,
        }
    }
}

impl Schema for UserCreateAttributes {
    const NAME: &'static str = "UserCreateAttributes";
    const REQUIRED_FIELDS: &'static [&'static str] = &["email"];
    const FIELDS: &'static [&'static str] = &["email", "name", "title"];
}

/// Object sent when creating a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCreateData {
    pub attributes: Record<UserCreateAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Record<UserRelationships>>,
    #[serde(rename = "type")]
    pub kind: UsersType,
}

impl Schema for UserCreateData {
    const NAME: &'static str = "UserCreateData";
    const REQUIRED_FIELDS: &'static [&'static str] = &["attributes", "type"];
    const FIELDS: &'static [&'static str] = &["attributes", "relationships", "type"];

    fn has_invalid_enum(&self) -> bool {
        self.kind.is_invalid()
    }

    fn has_unparsed_child(&self) -> bool {
        self.attributes.has_unparsed() || self.relationships.has_unparsed()
    }
}

/// Create a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCreateRequest {
    pub data: Record<UserCreateData>,
}

impl UserCreateRequest {
    /// Builds a create request, assigning `role_ids` as role relationships.
    pub fn new(attributes: UserCreateAttributes, role_ids: &[&str]) -> Result<Self> {
        if attributes.email.trim().is_empty() {
            return Err(Error::Validation(
                ValidationError::new("email is required").with_field("email"),
            ));
        }
        if let Some(blank) = role_ids.iter().position(|id| id.trim().is_empty()) {
            return Err(Error::Validation(
                ValidationError::new(format!("role id at index {blank} is empty"))
                    .with_field("relationships.roles"),
            ));
        }

        let relationships = (!role_ids.is_empty()).then(|| {
            Record::new(UserRelationships {
                org: None,
                roles: Some(Record::new(RelationshipToRoles {
                    data: Some(
                        role_ids
                            .iter()
                            .map(|id| Record::new(RelationshipToRoleData::new(*id)))
                            .collect(),
                    ),
                })),
            })
        });

        Ok(Self {
            data: Record::new(UserCreateData {
                attributes: Record::new(attributes),
                relationships,
                kind: UsersType::Users,
            }),
        })
    }
}

impl Schema for UserCreateRequest {
    const NAME: &'static str = "UserCreateRequest";
    const REQUIRED_FIELDS: &'static [&'static str] = &["data"];
    const FIELDS: &'static [&'static str] = &["data"];

    fn has_unparsed_child(&self) -> bool {
        self.data.has_unparsed()
    }
}
