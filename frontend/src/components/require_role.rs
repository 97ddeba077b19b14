use global_magazine_shared::Role;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{router::Route, session};

#[derive(Properties, PartialEq)]
pub struct RequireRoleProps {
    /// Roles allowed to see the children.
    pub roles: Vec<Role>,
    #[prop_or_default]
    pub children: Children,
}

/// Shared authorization gate. Pages mount this once instead of repeating
/// the signed-in/role check inline; anyone failing the check is sent to
/// the login page.
#[function_component(RequireRole)]
pub fn require_role(props: &RequireRoleProps) -> Html {
    let navigator = use_navigator();
    let allowed = session::is_authenticated() && session::has_role(&props.roles);

    {
        let navigator = navigator.clone();
        use_effect_with(allowed, move |allowed| {
            if !allowed {
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&Route::Login);
                }
            }
            || ()
        });
    }

    if allowed {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {
            <div class="auth-gate text-center py-20">
                <p>{ "Sign in with an authorized account to view this page." }</p>
            </div>
        }
    }
}
