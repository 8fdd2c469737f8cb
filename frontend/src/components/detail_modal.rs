use yew::prelude::*;

use crate::content::detail_for;

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(DetailModal)]
pub fn detail_modal(props: &DetailModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let detail = detail_for(&props.title);

    html! {
        <div class="modal-overlay">
            <div class="modal-panel">
                <button class="modal-x" onclick={close.clone()}>{"✕"}</button>
                <h3>{ props.title.clone() }</h3>
                if let Some(detail) = detail {
                    if let Some(src) = detail.image {
                        <img src={src} alt={props.title.clone()} width="500" height="300" class="modal-image" />
                    }
                    <p>{ detail.body }</p>
                }
                <button class="primary-button" onclick={close}>{"Close"}</button>
            </div>
        </div>
    }
}
