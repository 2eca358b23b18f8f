use i18nrs::yew::use_translation;
use yew::{Callback, function_component, html, use_effect_with, use_state_eq};

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language;

#[function_component(LanguageSelector)]
pub fn language_selector() -> yew::Html {
    let (i18n, set_language) = use_translation();
    let language_state = use_state_eq(|| i18n.get_current_language().to_string());

    // Keep local state in sync when the language changes elsewhere.
    {
        let language_state = language_state.clone();
        use_effect_with(i18n.clone(), move |i18n| {
            language_state.set(i18n.get_current_language().to_string());
            || ()
        });
    }

    let on_click = {
        let language_state = language_state.clone();
        Callback::from(move |code: String| {
            language_state.set(code.clone());
            set_language.emit(code);
        })
    };

    let current_code = (*language_state).clone();
    let current_flag = language::get_language_info(&current_code)
        .map(|info| info.flag)
        .unwrap_or("🏳");
    let mut languages: Vec<_> = language::supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <span>{ current_flag }</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
            {
                for languages.into_iter().map(|info| {
                    html! {
                        <LanguageSelectorButton
                            is_active={info.code == current_code}
                            info={info}
                            on_click={on_click.clone()}
                        />
                    }
                })
            }
            </ul>
        </div>
    }
}
