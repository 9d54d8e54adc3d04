use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_cancel: Callback<MouseEvent>,
    pub on_confirm: Callback<MouseEvent>,
}

#[function_component(ConfirmPanel)]
pub fn confirm_panel(Props { on_cancel, on_confirm }: &Props) -> Html {
    html! {
        <div class="show-recipe__confirm">
            <h1>{ "Are you sure?" }</h1>
            <div class="show-recipe__confirm-btns">
                <button onclick={on_cancel.clone()}>{ "Cancel" }</button>
                <button onclick={on_confirm.clone()}>{ "Delete" }</button>
            </div>
        </div>
    }
}
