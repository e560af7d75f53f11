#[cfg(test)]
mod tests {
    use crate::models::{Block, Context, OutgoingEnvelope};
    use serde::Deserialize;
    use serde_json::json;

    fn block_with_args(args: serde_json::Value) -> Block {
        serde_json::from_value(json!({
            "id": "block-1",
            "name": "test-block",
            "args": args,
        }))
        .expect("block fixture should deserialize")
    }

    #[test]
    fn test_text_envelope_wire_format() {
        let envelope = OutgoingEnvelope::text("Hello there");

        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            wire,
            json!({
                "format": "text",
                "message": { "text": "Hello there" },
            })
        );
        assert_eq!(envelope.message_text(), "Hello there");
    }

    #[test]
    fn test_block_arguments_decode_into_settings_type() {
        #[derive(Debug, Default, Deserialize, PartialEq)]
        #[serde(default)]
        struct DemoArgs {
            greeting: Option<String>,
            max_items: Option<u32>,
        }

        let block = block_with_args(json!({ "greeting": "hi", "max_items": 3 }));
        let args: DemoArgs = block.arguments().unwrap();
        assert_eq!(args.greeting.as_deref(), Some("hi"));
        assert_eq!(args.max_items, Some(3));

        // A block with no stored args decodes to the defaults.
        let empty: DemoArgs = block_with_args(json!({})).arguments().unwrap();
        assert_eq!(empty, DemoArgs::default());
    }

    #[test]
    fn test_block_arguments_error_names_the_block() {
        #[derive(Debug, Deserialize)]
        struct StrictArgs {
            #[allow(dead_code)]
            required: String,
        }

        let block = block_with_args(json!({ "required": 42 }));
        let err = block.arguments::<StrictArgs>().unwrap_err();
        assert!(
            err.to_string().contains("test-block"),
            "error should name the block: {}",
            err
        );
    }

    #[test]
    fn test_context_string_var_filters_blank_values() {
        let context: Context = serde_json::from_value(json!({
            "vars": {
                "event_name": "  Demo Call  ",
                "empty": "   ",
                "number": 7,
            }
        }))
        .unwrap();

        assert_eq!(context.string_var("event_name"), Some("Demo Call"));
        assert_eq!(context.string_var("empty"), None, "blank strings count as unset");
        assert_eq!(context.string_var("number"), None, "non-strings count as unset");
        assert_eq!(context.string_var("missing"), None);
    }

    #[test]
    fn test_context_defaults_to_no_vars() {
        let context: Context = serde_json::from_str("{}").unwrap();
        assert!(context.vars.is_empty());
        assert_eq!(context.string_var("anything"), None);
    }
}
