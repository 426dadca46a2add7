use wasm_bindgen::JsCast;
use wx_chart_ui::axis::Tick;
use wx_chart_ui::frame::Frame;
use wx_chart_ui::layout::ChartLayout;
use wx_chart_ui::legend::LegendEntry;
use wx_chart_ui::marks::Mark;
use wx_chart_ui::state::InteractionState;
use wx_lcd::attribute::DailyAttribute;
use wx_lcd::client::{fetch_daily_climate, DAILY_CLIMATE_CSV_URL};
use wx_lcd::error::LcdError;
use wx_lcd::observation::DailyObservation;
use yew::prelude::*;

const APP_DIV_ID: &str = "daily-climate-chart";
const Y_SELECT_ID: &str = "y-select";
const LOADING_TEXT: &str = "Loading...";
const EMPTY_TEXT: &str = "No data available.";

pub enum Msg {
    DataLoaded(Result<Vec<DailyObservation>, LcdError>),
    AttributeSelected(String),
    StationHovered(String),
    HoverCleared,
    WindowDocumentFail,
    AttributeSelectionFail,
    DomIdFail,
}

/// Where the remote dataset load currently stands.
#[derive(Debug)]
enum LoadState {
    Loading,
    Ready,
    Empty,
    Failed(String),
}

#[derive(Debug)]
struct DailyClimateModel {
    // loaded once at startup, then read-only
    observations: Vec<DailyObservation>,
    // selected Y attribute and hovered legend station
    interaction: InteractionState,
    load: LoadState,
    layout: ChartLayout,
}

fn generic_callback(_event: Event, dom_id_str: &str) -> Msg {
    web_sys::window()
        .and_then(|window| window.document())
        .map_or_else(
            || {
                log::warn!("window document object not found.");
                Msg::WindowDocumentFail
            },
            |document| match dom_id_str {
                Y_SELECT_ID => match document.get_element_by_id(dom_id_str) {
                    Some(input) => match input.dyn_into::<web_sys::HtmlSelectElement>() {
                        Ok(select_element) => {
                            let value = select_element.value();
                            log::info!("callback: {}", value);
                            Msg::AttributeSelected(value)
                        }
                        Err(_) => {
                            log::warn!("{} is not a select element.", dom_id_str);
                            Msg::AttributeSelectionFail
                        }
                    },
                    None => {
                        log::warn!("{} dom object not found.", dom_id_str);
                        Msg::AttributeSelectionFail
                    }
                },
                _ => Msg::DomIdFail,
            },
        )
}

fn view_x_tick(tick: &Tick, inner_height: f64, tick_offset: f64) -> Html {
    html! {
        <g class="tick" transform={format!("translate({},0)", tick.position)}>
            <line y2={inner_height.to_string()} />
            <text style="text-anchor: middle;" dy=".71em" y={(inner_height + tick_offset).to_string()}>
                { tick.label.clone() }
            </text>
        </g>
    }
}

fn view_y_tick(tick: &Tick, inner_width: f64, tick_offset: f64) -> Html {
    html! {
        <g class="tick" transform={format!("translate(0,{})", tick.position)}>
            <line x2={inner_width.to_string()} />
            <text style="text-anchor: end;" x={(-tick_offset).to_string()} dy=".32em">
                { tick.label.clone() }
            </text>
        </g>
    }
}

fn view_mark(mark: &Mark) -> Html {
    html! {
        <circle class="mark" cx={mark.x.to_string()} cy={mark.y.to_string()}
            fill={mark.fill.clone()} r={mark.radius.to_string()}>
            <title>{ mark.tooltip.clone() }</title>
        </circle>
    }
}

impl DailyClimateModel {
    fn view_selector(&self, ctx: &Context<Self>) -> Html {
        let attribute_change_callback = ctx
            .link()
            .callback(|event: Event| generic_callback(event, Y_SELECT_ID));
        html! {
            <div class="menus-container">
                // Dropdown list for selecting the Y attribute
                <select id={Y_SELECT_ID} onchange={attribute_change_callback}>
                { for
                    DailyAttribute::ALL.into_iter().map(|attribute| {
                        if attribute == self.interaction.selected() {
                            html! {
                                <option value={attribute.key()} selected=true>{ attribute.label() }</option>
                            }
                        } else {
                            html! {
                                <option value={attribute.key()}>{ attribute.label() }</option>
                            }
                        }
                    })
                }
                </select>
            </div>
        }
    }

    fn view_legend_row(&self, ctx: &Context<Self>, entry: &LegendEntry) -> Html {
        let station_name = entry.station_name.clone();
        let onmouseenter = ctx
            .link()
            .callback(move |_: MouseEvent| Msg::StationHovered(station_name.clone()));
        let onmouseout = ctx.link().callback(|_: MouseEvent| Msg::HoverCleared);
        html! {
            <g class="tick" transform={format!("translate(0,{})", entry.y)}
                onmouseenter={onmouseenter} onmouseout={onmouseout}
                opacity={entry.opacity.to_string()}>
                <circle fill={entry.fill.clone()} r={self.layout.circle_radius.to_string()} />
                <text x={self.layout.legend.tick_text_offset.to_string()} dy=".32em">
                    { entry.station_name.clone() }
                </text>
            </g>
        }
    }

    fn view_svg(&self, ctx: &Context<Self>, frame: &Frame) -> Html {
        let layout = &self.layout;
        let inner_width = layout.inner_width();
        let inner_height = layout.inner_height();
        html! {
            <svg width={layout.width.to_string()} height={layout.height.to_string()}>
                <g transform={format!("translate({},{})", layout.margin.left, layout.margin.top)}>
                    { for frame.x_ticks.iter().map(|tick| view_x_tick(tick, inner_height, layout.tick_offset)) }
                    <text class="axis-label" text-anchor="middle"
                        transform={format!("translate({},{}) rotate(-90)", -layout.y_axis_label_offset, inner_height / 2.0)}>
                        { frame.y_axis_label.clone() }
                    </text>
                    { for frame.y_ticks.iter().map(|tick| view_y_tick(tick, inner_width, layout.tick_offset)) }
                    <text class="axis-label" text-anchor="middle"
                        x={(inner_width / 2.0).to_string()} y={(inner_height + layout.x_axis_label_offset).to_string()}>
                        { frame.x_axis_label.clone() }
                    </text>
                    <g transform={format!("translate({},{})", inner_width + layout.legend.x_offset, layout.legend.y_offset)}>
                        <text class="axis-label" text-anchor="middle"
                            x={layout.legend.title_x.to_string()} y={layout.legend.title_y.to_string()}>
                            { frame.legend_title.clone() }
                        </text>
                        <g>
                        { for frame.legend.iter().map(|entry| self.view_legend_row(ctx, entry)) }
                        </g>
                    </g>
                    // base layer dims as a whole while a hover is active
                    <g opacity={frame.base_opacity.to_string()}>
                        { for frame.marks.iter().map(view_mark) }
                    </g>
                    // hovered station redrawn on top at full opacity
                    { for frame.highlighted.iter().map(view_mark) }
                </g>
            </svg>
        }
    }

    fn view_chart(&self, ctx: &Context<Self>) -> Html {
        let chart = match Frame::compose(&self.observations, &self.interaction, &self.layout) {
            Some(frame) => self.view_svg(ctx, &frame),
            None => html! { <pre>{ "No plottable values for this attribute." }</pre> },
        };
        html! {
            <div id="chart">
                { self.view_selector(ctx) }
                { chart }
            </div>
        }
    }
}

impl Component for DailyClimateModel {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // one-shot fetch; the result arrives as a message, which yew drops
        // if the component is gone by then
        ctx.link().send_future(async {
            let client = reqwest::Client::new();
            Msg::DataLoaded(fetch_daily_climate(&client, DAILY_CLIMATE_CSV_URL).await)
        });
        DailyClimateModel {
            observations: Vec::new(),
            interaction: InteractionState::default(),
            load: LoadState::Loading,
            layout: ChartLayout::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::WindowDocumentFail | Msg::AttributeSelectionFail | Msg::DomIdFail => false,
            Msg::DataLoaded(Ok(observations)) => {
                if observations.is_empty() {
                    log::warn!("daily climate feed returned no observations");
                    self.load = LoadState::Empty;
                } else {
                    log::info!("loaded {} daily observations", observations.len());
                    self.observations = observations;
                    self.load = LoadState::Ready;
                }
                true
            }
            Msg::DataLoaded(Err(e)) => {
                log::error!("failed to load daily climate data: {}", e);
                self.load = LoadState::Failed(e.to_string());
                true
            }
            Msg::AttributeSelected(key) => self.interaction.select_attribute(&key),
            Msg::StationHovered(station_name) => {
                self.interaction.hover_station(&station_name);
                true
            }
            Msg::HoverCleared => {
                self.interaction.clear_hover();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.load {
            LoadState::Loading => html! { <pre>{ LOADING_TEXT }</pre> },
            LoadState::Empty => html! { <pre>{ EMPTY_TEXT }</pre> },
            LoadState::Failed(message) => {
                html! { <pre>{ format!("Failed to load data: {}", message) }</pre> }
            }
            LoadState::Ready => self.view_chart(ctx),
        }
    }
}

fn main() {
    wx_log::init();
    let mount_point = web_sys::window()
        .and_then(|window| window.document())
        .map_or_else(
            || {
                let log_str = "failed to load wasm module successfully";
                log::error!("{}", log_str);
                panic!("{}", log_str);
            },
            |document| match document.get_element_by_id(APP_DIV_ID) {
                Some(div_element) => div_element,
                None => {
                    let log_str = "mount point div not found in index.html";
                    log::error!("{}", log_str);
                    panic!("{}", log_str);
                }
            },
        );
    let renderer = yew::Renderer::<DailyClimateModel>::with_root(mount_point);
    renderer.render();
}
