// Composition root for the customer_records bounded context.
//
// Responsibilities
// - Wire the record table, store, handlers and dispatcher into shared state.
// - Expose the HTTP routes and the GraphQL schema over that state.
// - Hand the item count refresher to main so it can be spawned on the runtime.

pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
