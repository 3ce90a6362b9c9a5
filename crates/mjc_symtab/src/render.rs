//! Class rendering under [`RenderOptions`].

use crate::class::ClassEntry;
use crate::entry::{Entry, SemanticEntry};
use crate::registry::ClassRegistry;
use crate::scope::ScopeEntry;
use mjc_options::RenderOptions;

pub(crate) fn render_class(
    class: &ClassEntry,
    options: &RenderOptions,
    registry: Option<&ClassRegistry>,
) -> String {
    let mut out = String::new();
    write_class(&mut out, class, options, registry, 0);
    out
}

fn write_class(
    out: &mut String,
    class: &ClassEntry,
    options: &RenderOptions,
    registry: Option<&ClassRegistry>,
    depth: usize,
) {
    let indent = " ".repeat(options.indent_width * depth);
    out.push_str(&format!("{}class {}", indent, class.name()));
    if options.show_superclass {
        let superclass = class
            .superclass()
            .and_then(|id| registry.and_then(|registry| registry.name_of(id)));
        if let Some(superclass) = superclass {
            out.push_str(" extends ");
            out.push_str(superclass);
        }
    }
    out.push_str(" {\n");

    if options.class_members {
        let member_indent = " ".repeat(options.indent_width * (depth + 1));
        for (_, member) in class.bindings() {
            match member {
                Entry::Class(nested) => write_class(out, nested, options, registry, depth + 1),
                other => {
                    out.push_str(&format!("{}{}{}\n", member_indent, other, options.member_terminator));
                }
            }
        }
    }

    out.push_str(&indent);
    out.push_str("}\n");
}
