pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod cart_storage;
        pub mod notifications;
        pub mod storefront_api;
    }
}

pub mod modules {
    pub mod cart {
        pub mod core {
            pub mod cart;
            pub mod decision;
            pub mod notice;
            pub mod product;
        }
        pub mod application {
            pub mod cart_store;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod add_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_product_amount {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_cart {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_error;
                pub mod http_error;
            }
        }
    }
}

pub mod shell;
