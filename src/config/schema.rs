use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["report_server"],
        "properties": {
            "report_server": {
                "type": "object",
                "required": ["base_url", "cookie_name", "environment", "username", "password"],
                "properties": {
                    "base_url": { "type": "string", "format": "uri" },
                    "ignore_cert_errors": { "type": "boolean" },
                    "cookie_name": { "type": "string", "minLength": 1 },
                    "environment": { "type": "string", "minLength": 1 },
                    "username": { "type": "string" },
                    "password": { "type": "string" },
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
});
