//! SVG templates.

use crate::error::Result;
use minijinja::{AutoEscape, Environment};

const BASE: &str = r#"<svg width="{{ width }}" height="{{ height }}" class="{{ class or 'svg' }}" version="1.1" xmlns="http://www.w3.org/2000/svg">
{%- block inner %}{% endblock %}
</svg>"#;

const MACROS: &str = r#"{% macro circle(x, y, fill, class="", r=2) -%}
<circle cx="{{ x }}" cy="{{ y }}" r="{{ r }}" fill="{{ fill }}" class="{{ class }}"/>
{%- endmacro %}"#;

const LINE: &str = r#"{% from "macros.svg" import circle -%}
<polyline points="{% for p in points %}{{ p.x }},{{ p.y }}{% if not loop.last %} {% endif %}{% endfor %}" class="line" fill="transparent" stroke="{{ line_color }}"/>
{%- if end_point %}
{{ circle(end_point.x, end_point.y, line_color, class="end", r=height_offset) }}
{%- endif %}
{%- for p in maxs %}
{{ circle(p.x, p.y, max_color, class="max", r=height_offset) }}
{%- endfor %}
{%- for p in mins %}
{{ circle(p.x, p.y, min_color, class="min", r=height_offset) }}
{%- endfor %}"#;

const SINGLE: &str = r#"{% extends "base.svg" %}
{%- block inner %}
{% include "line.svg" %}
{% endblock %}"#;

const MULTI: &str = r#"{% extends "base.svg" %}
{%- block inner %}
{%- for line in lines %}
{{ line|safe }}
{%- endfor %}
{% endblock %}"#;

pub(crate) const LINE_TEMPLATE: &str = "line.svg";
pub(crate) const SINGLE_TEMPLATE: &str = "sparkline.svg";
pub(crate) const MULTI_TEMPLATE: &str = "multi.svg";

/// Template environment with every SVG template loaded. Attribute values
/// are HTML-escaped.
pub(crate) fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("base.svg", BASE)?;
    env.add_template("macros.svg", MACROS)?;
    env.add_template(LINE_TEMPLATE, LINE)?;
    env.add_template(SINGLE_TEMPLATE, SINGLE)?;
    env.add_template(MULTI_TEMPLATE, MULTI)?;
    Ok(env)
}
