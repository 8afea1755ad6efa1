use leptos::*;

use crate::panel::{ClassSet, ClassTarget, PanelToggleController};

// --- Constants ---

// Form targets on the chat backend
const LOGIN_ACTION: &str = "/login/";
const REGISTER_ACTION: &str = "/register/";

/// Reactive class list: the view re-renders the wrapper's `class` when it changes.
impl ClassTarget for RwSignal<ClassSet> {
    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.update(|set| {
                set.add(class);
            });
        }
    }

    fn remove_class(&self, class: &str) {
        if self.has_class(class) {
            self.update(|set| {
                set.remove(class);
            });
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.with_untracked(|set| set.contains(class))
    }
}

// --- Components ---

/// Landing page login and register forms sharing one wrapper.
///
/// Both forms are always rendered; the stylesheet shows the register form
/// when the wrapper carries `active` and the login form otherwise.
#[component]
pub fn AuthPanels(
    /// Django CSRF token, rendered into both forms when present.
    #[prop(optional, into)]
    csrf_token: Option<String>,
    /// Error from the last submit, shown above the forms.
    #[prop(optional, into)]
    error: Option<String>,
) -> impl IntoView {
    // Class list of the wrapper element
    let classes = create_rw_signal(ClassSet::from_iter(["wrapper"]));
    let controller = store_value(PanelToggleController::with_active_marker(classes));

    let on_register_link = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        controller.with_value(|c| c.on_register_requested());
    };

    let on_login_link = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        controller.with_value(|c| c.on_login_requested());
    };

    let csrf_field = move || {
        csrf_token.clone().map(|token| {
            view! { <input type="hidden" name="csrfmiddlewaretoken" value=token/> }
        })
    };

    view! {
        <div class=move || classes.get().to_string()>
            {error.map(|msg| view! {
                <div class="alert error" role="alert">{msg}</div>
            })}

            // Login Form
            <div class="form-box login">
                <h2>"Login"</h2>
                <form action=LOGIN_ACTION method="post">
                    {csrf_field()}
                    <div class="input-box">
                        <input type="text" name="username" placeholder="Username" required=true/>
                    </div>
                    <div class="input-box">
                        <input type="password" name="password" placeholder="Password" required=true/>
                    </div>
                    <button type="submit" class="btn">"Login"</button>
                    <p class="switch">
                        "Don't have an account? "
                        <a href="#" class="register-link" on:click=on_register_link>"Register"</a>
                    </p>
                </form>
            </div>

            // Register Form
            <div class="form-box register">
                <h2>"Register"</h2>
                <form action=REGISTER_ACTION method="post">
                    {csrf_field()}
                    <div class="input-box">
                        <input type="text" name="username" placeholder="Username" required=true/>
                    </div>
                    <div class="input-box">
                        <input type="email" name="email" placeholder="Email"/>
                    </div>
                    <div class="input-box">
                        <input type="password" name="password" placeholder="Password" required=true/>
                    </div>
                    <button type="submit" class="btn">"Register"</button>
                    <p class="switch">
                        "Already have an account? "
                        <a href="#" class="login-link" on:click=on_login_link>"Login"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::panel::PanelView;

    #[test]
    fn signal_class_list_follows_controller() {
        let runtime = create_runtime();

        let classes = create_rw_signal(ClassSet::from_iter(["wrapper"]));
        let controller = PanelToggleController::with_active_marker(classes);

        controller.on_register_requested();
        controller.on_register_requested();
        assert_eq!(classes.get_untracked().to_string(), "wrapper active");
        assert_eq!(controller.view(), PanelView::Register);

        controller.on_login_requested();
        assert_eq!(classes.get_untracked().to_string(), "wrapper");
        assert_eq!(controller.view(), PanelView::Login);

        runtime.dispose();
    }

    #[test]
    fn noop_requests_do_not_notify() {
        let runtime = create_runtime();

        let classes = create_rw_signal(ClassSet::from_iter(["wrapper"]));
        let renders = Rc::new(Cell::new(0usize));
        let counter = renders.clone();
        create_isomorphic_effect(move |_| {
            classes.with(|_| ());
            counter.set(counter.get() + 1);
        });
        let controller = PanelToggleController::with_active_marker(classes);

        controller.on_login_requested();
        assert_eq!(renders.get(), 1);
        controller.on_register_requested();
        controller.on_register_requested();
        assert_eq!(renders.get(), 2);

        runtime.dispose();
    }
}
