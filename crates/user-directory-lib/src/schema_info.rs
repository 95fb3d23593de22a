use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::SchemaError;

/// Argument and return types of one field, rendered in SDL notation
/// (e.g. `ID!`, `[User!]!`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSignature {
    pub arguments: BTreeMap<String, String>,
    pub return_type: String,
}

#[derive(Debug, Clone)]
pub struct ObjectInfo {
    pub fields: BTreeMap<String, FieldSignature>,
    position: graphql_parser::Pos,
}

/**
 * The parts of a GraphQL schema document that clients depend on: object
 * types, their fields and argument types, and the name of the query root.
 *
 * Scalars, enums, input objects, interfaces, unions, extensions and
 * directive definitions are skipped.
 */
#[derive(Debug, Clone)]
pub struct SchemaInfo {
    obj_types: BTreeMap<String, ObjectInfo>,
    query_type: String,
}
impl SchemaInfo {
    pub fn parse(schema_src: &str) -> Result<Self, SchemaError> {
        let graphql_schema_doc: graphql_parser::schema::Document<'_, String> =
            graphql_parser::parse_schema(schema_src)?;

        let mut obj_types: BTreeMap<String, ObjectInfo> = BTreeMap::new();
        let mut query_type = None::<String>;

        for def in graphql_schema_doc.definitions {
            use graphql_parser::schema;
            match def {
                schema::Definition::SchemaDefinition(def) => {
                    if let Some(query) = def.query {
                        query_type = Some(query);
                    }
                },
                schema::Definition::TypeDefinition(schema::TypeDefinition::Object(obj_type)) => {
                    let info = ObjectInfo::from_ast(&obj_type);
                    match obj_types.entry(obj_type.name) {
                        Entry::Occupied(entry) => {
                            return Err(SchemaError::DuplicateObjectType {
                                name: entry.key().clone(),
                                first: entry.get().position.clone(),
                                second: info.position,
                            });
                        },
                        Entry::Vacant(entry) => {
                            entry.insert(info);
                        },
                    }
                },
                _ => (),
            }
        }

        Ok(SchemaInfo {
            obj_types,
            query_type: query_type.unwrap_or_else(|| String::from("Query")),
        })
    }

    pub fn query_type(&self) -> &str {
        self.query_type.as_str()
    }

    pub fn object(&self, name: &str) -> Option<&ObjectInfo> {
        self.obj_types.get(name)
    }

    /**
     * Verifies that this schema provides everything `contract` declares.
     *
     * The check is one-directional: extra types, fields or arguments on
     * this side are allowed, but every declared one must exist here with
     * the identical type. The first violation is returned.
     */
    pub fn check_implements(&self, contract: &SchemaInfo) -> Result<(), SchemaError> {
        if self.query_type != contract.query_type {
            return Err(SchemaError::TypeMismatch {
                location: String::from("schema.query"),
                expected: contract.query_type.clone(),
                actual: self.query_type.clone(),
            });
        }

        for (type_name, expected_obj) in &contract.obj_types {
            let actual_obj = self
                .obj_types
                .get(type_name)
                .ok_or_else(|| SchemaError::MissingType(type_name.clone()))?;

            for (field_name, expected_field) in &expected_obj.fields {
                let actual_field = actual_obj.fields.get(field_name).ok_or_else(|| {
                    SchemaError::MissingField {
                        type_name: type_name.clone(),
                        field: field_name.clone(),
                    }
                })?;

                if actual_field.return_type != expected_field.return_type {
                    return Err(SchemaError::TypeMismatch {
                        location: format!("{}.{}", type_name, field_name),
                        expected: expected_field.return_type.clone(),
                        actual: actual_field.return_type.clone(),
                    });
                }

                for (arg_name, expected_arg) in &expected_field.arguments {
                    let actual_arg = actual_field.arguments.get(arg_name).ok_or_else(|| {
                        SchemaError::MissingArgument {
                            type_name: type_name.clone(),
                            field: field_name.clone(),
                            argument: arg_name.clone(),
                        }
                    })?;
                    if actual_arg != expected_arg {
                        return Err(SchemaError::TypeMismatch {
                            location: format!("{}.{}({}:)", type_name, field_name, arg_name),
                            expected: expected_arg.clone(),
                            actual: actual_arg.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl ObjectInfo {
    fn from_ast(obj_type: &graphql_parser::schema::ObjectType<'_, String>) -> Self {
        let fields = obj_type
            .fields
            .iter()
            .map(|field| {
                let arguments = field
                    .arguments
                    .iter()
                    .map(|arg| (arg.name.clone(), render_type(&arg.value_type)))
                    .collect();
                let signature = FieldSignature {
                    arguments,
                    return_type: render_type(&field.field_type),
                };
                (field.name.clone(), signature)
            })
            .collect();

        ObjectInfo {
            fields,
            position: obj_type.position.clone(),
        }
    }
}

fn render_type(field_type: &graphql_parser::query::Type<'_, String>) -> String {
    use graphql_parser::query::Type;
    match field_type {
        Type::NamedType(name) => name.clone(),
        Type::ListType(inner_type) => format!("[{}]", render_type(inner_type)),
        Type::NonNullType(inner_type) => format!("{}!", render_type(inner_type)),
    }
}
