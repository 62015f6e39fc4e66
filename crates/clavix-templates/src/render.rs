//! Slash-command catalog and rendering
//!
//! Command bodies are handlebars templates rendered per tool with the tool's
//! display name and the binary version. Template syntax errors are
//! construction errors, not render-time surprises.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::json;

use crate::adapter::{RenderedCommand, TargetAdapter};

/// One slash command clavix ships.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    template: &'static str,
}

const FAST_TEMPLATE: &str = "\
# {{title}}

{{description}}

Run the prompt below through clavix in fast mode, then continue with the
improved version.

```
clavix optimize --mode fast \"$ARGUMENTS\"
```

Generated by clavix {{version}} for {{tool}}.
";

const DEEP_TEMPLATE: &str = "\
# {{title}}

{{description}}

Deep mode applies the full pattern catalog: structure extraction, implicit
requirements, constraints and success criteria.

```
clavix optimize --mode deep \"$ARGUMENTS\"
```

Generated by clavix {{version}} for {{tool}}.
";

const PRD_TEMPLATE: &str = "\
# {{title}}

{{description}}

Answer each question in turn; clavix validates every answer and asks for
detail where an answer is too thin to build on.

```
clavix prd \"$ARGUMENTS\"
```

Generated by clavix {{version}} for {{tool}}.
";

const STATUS_TEMPLATE: &str = "\
# {{title}}

{{description}}

```
clavix status
```

Generated by clavix {{version}} for {{tool}}.
";

const UPDATE_TEMPLATE: &str = "\
# {{title}}

{{description}}

```
clavix update
```

Generated by clavix {{version}} for {{tool}}.
";

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "clavix-fast",
        title: "Clavix: Fast Optimize",
        description: "Quick single-pass prompt cleanup before sending.",
        template: FAST_TEMPLATE,
    },
    CommandSpec {
        name: "clavix-deep",
        title: "Clavix: Deep Optimize",
        description: "Full pattern catalog for prompts that deserve real structure.",
        template: DEEP_TEMPLATE,
    },
    CommandSpec {
        name: "clavix-prd",
        title: "Clavix: PRD Interview",
        description: "Guided requirements interview with per-answer validation.",
        template: PRD_TEMPLATE,
    },
    CommandSpec {
        name: "clavix-status",
        title: "Clavix: Workspace Status",
        description: "Show config, task progress and recent prompt records.",
        template: STATUS_TEMPLATE,
    },
    CommandSpec {
        name: "clavix-update",
        title: "Clavix: Refresh Commands",
        description: "Regenerate slash-command files after upgrading clavix.",
        template: UPDATE_TEMPLATE,
    },
];

/// Registered command templates, compiled once at construction.
pub struct CommandCatalog {
    handlebars: Handlebars<'static>,
    version: String,
}

impl CommandCatalog {
    pub fn new(version: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        for spec in COMMANDS {
            handlebars
                .register_template_string(spec.name, spec.template)
                .with_context(|| format!("invalid template for command {}", spec.name))?;
        }
        Ok(Self {
            handlebars,
            version: version.to_string(),
        })
    }

    pub fn specs() -> &'static [CommandSpec] {
        COMMANDS
    }

    /// Render every command for one tool.
    pub fn render_for(&self, adapter: &dyn TargetAdapter) -> Result<Vec<RenderedCommand>> {
        COMMANDS
            .iter()
            .map(|spec| {
                let content = self
                    .handlebars
                    .render(
                        spec.name,
                        &json!({
                            "title": spec.title,
                            "description": spec.description,
                            "tool": adapter.display_name(),
                            "version": self.version,
                        }),
                    )
                    .with_context(|| format!("failed to render command {}", spec.name))?;
                Ok(RenderedCommand {
                    name: spec.name.to_string(),
                    content,
                })
            })
            .collect()
    }
}
