pub mod login_modal;
pub mod menu_list;
pub mod reservation_form;
pub mod reservations_list;
pub mod restaurant_details;
pub mod review_form;
pub mod reviews_list;
