use wasm_bindgen_test::*;

use crate::game::{GameProps, GameView};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn mounts_the_toolbar_without_a_grid() {
    let root = gloo::utils::document().create_element("div").unwrap();
    yew::Renderer::<GameView>::with_root_and_props(root.clone(), GameProps { endpoint: None })
        .render();
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;

    // two toolbar buttons, no table until a puzzle arrives
    assert!(root.query_selector("button").unwrap().is_some());
    assert!(root.query_selector("table").unwrap().is_none());
}
