use dioxus::prelude::*;

use crate::client::component::{GuestOnly, Layout, RequiresAdmin};
use crate::client::route::{
    admin::{AdminCategories, AdminProducts, AdminUsers},
    Home, Login, NotFound, Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[layout(GuestOnly)]
            #[route("/login")]
            Login {},

            #[route("/register?:code")]
            Register { code: String },
        #[end_layout]

        #[layout(RequiresAdmin)]
        #[nest("/admin")]
            #[route("/")]
            AdminCategories {},

            #[route("/products")]
            AdminProducts {},

            #[route("/users")]
            AdminUsers {},
        #[end_nest]
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
