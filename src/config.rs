//! Rule sets stored as JSON.
//!
//! ```json
//! {
//!   "continue_on_error": false,
//!   "rules": [
//!     { "name": "ws", "type": "pattern", "pattern": "[ \\t]+" },
//!     { "name": "nl", "type": "configured", "match": "\\r?\\n", "line_breaks": true },
//!     { "name": "keyword", "type": "alternatives", "values": ["if", "else"] },
//!     { "name": "semi", "type": "literal", "literal": ";" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{
    error::LexerResult,
    rule::{Rule, RuleConfig, Rules},
    tokenizer::{driver::TokenizeOptions, matcher::Matcher},
    transform::ValueTransform,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    #[serde(default)]
    pub continue_on_error: bool,

    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub name: String,
    #[serde(flatten)]
    pub rule: RuleSpec,
}

/// Serialized shape of a [`Rule`], selected by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleSpec {
    Literal {
        literal: String,
    },
    Pattern {
        pattern: String,
    },
    Alternatives {
        values: Vec<String>,
    },
    Configured {
        #[serde(rename = "match")]
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<ValueTransform>,
        #[serde(default)]
        line_breaks: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        priority: Option<i32>,
    },
}

impl From<&RuleSpec> for Rule {
    fn from(spec: &RuleSpec) -> Self {
        match spec {
            RuleSpec::Literal { literal } => Rule::Literal(literal.clone()),
            RuleSpec::Pattern { pattern } => Rule::Pattern(pattern.clone()),
            RuleSpec::Alternatives { values } => Rule::Alternatives(values.clone()),
            RuleSpec::Configured {
                pattern,
                value,
                line_breaks,
                priority,
            } => {
                let mut config = RuleConfig::new(pattern.as_str()).line_breaks(*line_breaks);
                if let Some(value) = value {
                    config = config.value_transform(value.clone());
                }
                if let Some(priority) = priority {
                    config = config.priority(*priority);
                }
                Rule::Configured(config)
            }
        }
    }
}

impl RuleSetConfig {
    pub fn from_json_str(content: &str) -> LexerResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> LexerResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_rules(&self) -> Rules {
        self.rules
            .iter()
            .map(|definition| (definition.name.clone(), Rule::from(&definition.rule)))
            .collect()
    }

    pub fn options(&self) -> TokenizeOptions {
        TokenizeOptions {
            continue_on_error: self.continue_on_error,
        }
    }

    pub fn compile(&self) -> LexerResult<Matcher> {
        Matcher::compile(&self.to_rules())
    }
}
