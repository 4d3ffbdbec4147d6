//! Hand-assembled OpenAPI document for the hrdesk API.
//!
//! Declares the `X-API-Key` header scheme and applies it to every
//! operation under `paths`.

use serde_json::{Value, json};

/// API key header name, also referenced by the auth check.
pub const API_KEY_HEADER: &str = "X-API-Key";

const SECURITY_SCHEME: &str = "ApiKeyHeader";

/// Builds the OpenAPI 3 document served at `/openapi.json`.
pub fn openapi_document() -> Value {
    let mut document = json!({
        "openapi": "3.0.3",
        "info": {
            "title": "hrdesk API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "An AI-powered HR assistant API with session memory."
        },
        "components": {
            "securitySchemes": {
                SECURITY_SCHEME: {
                    "type": "apiKey",
                    "in": "header",
                    "name": API_KEY_HEADER
                }
            }
        },
        "paths": {
            "/chat": {
                "post": {
                    "summary": "Resolve a free-text HR question",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "required": ["query", "session_id"],
                                    "properties": {
                                        "query": { "type": "string" },
                                        "session_id": { "type": "string" }
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Answer, suggestion prompt, or delegated completion",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "response": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/classify": {
                "get": {
                    "summary": "Advisory topic label for a query",
                    "parameters": [{
                        "name": "query",
                        "in": "query",
                        "required": true,
                        "schema": { "type": "string" }
                    }],
                    "responses": {
                        "200": { "description": "Category label, or 'unknown'" }
                    }
                }
            },
            "/leave-balance": {
                "get": {
                    "summary": "Mock HRMS leave-balance lookup",
                    "parameters": [{
                        "name": "session_id",
                        "in": "query",
                        "required": true,
                        "schema": { "type": "string" }
                    }],
                    "responses": {
                        "200": { "description": "Leave balance for the session" },
                        "404": { "description": "Employee not found" }
                    }
                }
            }
        }
    });

    apply_security(&mut document);
    document
}

/// Marks every operation as requiring the API key scheme.
fn apply_security(document: &mut Value) {
    let Some(paths) = document
        .get_mut("paths")
        .and_then(Value::as_object_mut)
    else {
        return;
    };

    for operations in paths.values_mut() {
        let Some(operations) = operations.as_object_mut() else {
            continue;
        };
        for operation in operations.values_mut() {
            if let Some(operation) = operation.as_object_mut() {
                operation.insert("security".to_string(), json!([{ SECURITY_SCHEME: [] }]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_declares_api_key_scheme() {
        let document = openapi_document();
        let scheme = &document["components"]["securitySchemes"][SECURITY_SCHEME];
        assert_eq!(scheme["type"], "apiKey");
        assert_eq!(scheme["in"], "header");
        assert_eq!(scheme["name"], API_KEY_HEADER);
    }

    #[test]
    fn test_every_operation_requires_the_key() {
        let document = openapi_document();
        let paths = document["paths"].as_object().unwrap();
        assert!(!paths.is_empty());

        for (path, operations) in paths {
            for (method, operation) in operations.as_object().unwrap() {
                let security = operation
                    .get("security")
                    .unwrap_or_else(|| panic!("{method} {path} has no security"));
                assert_eq!(security[0][SECURITY_SCHEME], json!([]));
            }
        }
    }
}
