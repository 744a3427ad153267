use leptos::prelude::*;
use tabbar::{TabBarContainer, TabItem, TabPane};

/// Three full-screen panes behind the floating bottom bar. Each pane keeps
/// itself mounted and fades against the shared selection.
#[component]
pub fn App() -> impl IntoView {
    let selection = RwSignal::new(0usize);

    view! {
        <TabBarContainer
            selected=selection
            on_select=Callback::new(move |index| selection.set(index))
        >
            <TabPane index=0 item=TabItem::new("Home", "house.fill")>
                <div class="pane pane--red"></div>
            </TabPane>
            <TabPane index=1 item=TabItem::new("Selected", "star.fill")>
                <div class="pane pane--green"></div>
            </TabPane>
            <TabPane index=2 item=TabItem::new("Settings", "gearshape.fill")>
                <div class="pane pane--blue"></div>
            </TabPane>
        </TabBarContainer>
    }
}
