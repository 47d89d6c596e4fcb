use common::TrafficTag;
use yew::prelude::*;

/// (text colour, background) per tag.
fn tag_colors(tag: TrafficTag) -> (&'static str, &'static str) {
    match tag {
        TrafficTag::Red => ("#FFFFFF", "#B22222"),
        TrafficTag::Green => ("#FFFFFF", "#2E8B57"),
        TrafficTag::White => ("#1F2937", "#D1D5DB"),
        TrafficTag::Black => ("#FFFFFF", "#111827"),
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum BadgeSize {
    #[default]
    Small,
    Medium,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub tag: TrafficTag,
    #[prop_or_default]
    pub size: BadgeSize,
    /// Replaces the tag name, e.g. "RED: 2"
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(TagBadge)]
pub fn tag_badge(props: &Props) -> Html {
    let (color, background) = tag_colors(props.tag);
    let size = match props.size {
        BadgeSize::Small => "badge-sm",
        BadgeSize::Medium => "badge-md",
    };
    let label = props
        .label
        .clone()
        .unwrap_or(AttrValue::Static(props.tag.as_str()));

    html! {
        <span
            class={classes!("badge", "font-bold", "border-0", size)}
            style={format!("color: {}; background-color: {};", color, background)}
        >
            {label}
        </span>
    }
}
