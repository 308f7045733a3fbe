mod requests;
mod responses;

pub use requests::{
    CreatePostRequest, LoginRequest, PostQuery, RegisterRequest, UpdatePostRequest,
    UpdateProfileRequest,
};
pub use responses::{
    ApiResponse, AuthData, AuthorView, PageMeta, PostData, PostListData, PostView, UserData,
    UserView,
};
