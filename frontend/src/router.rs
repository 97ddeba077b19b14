use global_magazine_shared::ContentKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/magazines")]
    Magazines,
    #[at("/magazines/:id")]
    MagazineDetail { id: String },

    #[at("/news")]
    News,
    #[at("/news/:id")]
    NewsDetail { id: String },

    #[at("/articles")]
    Articles,
    #[at("/articles/:id")]
    ArticleDetail { id: String },

    #[at("/stories")]
    Stories,
    #[at("/stories/:id")]
    StoryDetail { id: String },

    #[at("/login")]
    Login,
    #[at("/register")]
    Register,

    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/magazines/new")]
    NewMagazine,
    #[at("/dashboard/magazines/:id/edit")]
    EditMagazine { id: String },
    #[at("/dashboard/news/new")]
    NewNews,
    #[at("/dashboard/news/:id/edit")]
    EditNews { id: String },
    #[at("/dashboard/articles/new")]
    NewArticle,
    #[at("/dashboard/articles/:id/edit")]
    EditArticle { id: String },
    #[at("/dashboard/banners/new")]
    NewBanner,
    #[at("/dashboard/banners/:id/edit")]
    EditBanner { id: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Listing route for one content type.
    pub fn listing(kind: ContentKind) -> Route {
        match kind {
            ContentKind::Magazine => Route::Magazines,
            ContentKind::News => Route::News,
            ContentKind::Article => Route::Articles,
            ContentKind::Story => Route::Stories,
        }
    }

    /// Detail route for one record of a content type.
    pub fn detail(kind: ContentKind, id: String) -> Route {
        match kind {
            ContentKind::Magazine => Route::MagazineDetail { id },
            ContentKind::News => Route::NewsDetail { id },
            ContentKind::Article => Route::ArticleDetail { id },
            ContentKind::Story => Route::StoryDetail { id },
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },

        Route::Magazines => {
            html! { <pages::content_list::ContentListPage kind={ContentKind::Magazine} /> }
        },
        Route::MagazineDetail {
            id,
        } => {
            html! { <pages::magazine_detail::MagazineDetailPage id={id} /> }
        },

        Route::News => html! { <pages::content_list::ContentListPage kind={ContentKind::News} /> },
        Route::NewsDetail {
            id,
        } => {
            html! { <pages::content_detail::ContentDetailPage kind={ContentKind::News} id={id} /> }
        },

        Route::Articles => {
            html! { <pages::content_list::ContentListPage kind={ContentKind::Article} /> }
        },
        Route::ArticleDetail {
            id,
        } => {
            html! {
                <pages::content_detail::ContentDetailPage kind={ContentKind::Article} id={id} />
            }
        },

        Route::Stories => {
            html! { <pages::content_list::ContentListPage kind={ContentKind::Story} /> }
        },
        Route::StoryDetail {
            id,
        } => {
            html! { <pages::content_detail::ContentDetailPage kind={ContentKind::Story} id={id} /> }
        },

        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Register => html! { <pages::register::RegisterPage /> },

        Route::Dashboard => html! { <pages::dashboard::DashboardPage /> },
        Route::NewMagazine => html! { <pages::magazine_form::MagazineFormPage id={None::<String>} /> },
        Route::EditMagazine {
            id,
        } => {
            html! { <pages::magazine_form::MagazineFormPage id={Some(id)} /> }
        },
        Route::NewNews => {
            html! { <pages::content_form::ContentFormPage kind={ContentKind::News} id={None::<String>} /> }
        },
        Route::EditNews {
            id,
        } => {
            html! { <pages::content_form::ContentFormPage kind={ContentKind::News} id={Some(id)} /> }
        },
        Route::NewArticle => {
            html! { <pages::content_form::ContentFormPage kind={ContentKind::Article} id={None::<String>} /> }
        },
        Route::EditArticle {
            id,
        } => {
            html! {
                <pages::content_form::ContentFormPage kind={ContentKind::Article} id={Some(id)} />
            }
        },
        Route::NewBanner => html! { <pages::banner_form::BannerFormPage id={None::<String>} /> },
        Route::EditBanner {
            id,
        } => {
            html! { <pages::banner_form::BannerFormPage id={Some(id)} /> }
        },

        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell flex flex-col" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
