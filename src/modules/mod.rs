pub mod qna;
