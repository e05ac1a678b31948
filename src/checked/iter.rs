use core::iter::FusedIterator;

use crate::checked::Checked;

/// Iterator over a borrowed success value. Yields at most one item.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the success value. Yields at most one item.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Checked<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.ok() }
    }
}

impl<'a, T, E> IntoIterator for &'a Checked<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> Checked<T, E> {
    /// Iterates over the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// assert_eq!(Checked::<i32, ()>::success(4).iter().next(), Some(&4));
    /// assert_eq!(Checked::<i32, ()>::failure(()).iter().next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_ref().ok() }
    }
}

/// Collects an iterator of `Checked` values, stopping at the first `Err`.
///
/// Items after the first failure are not pulled from the source iterator.
///
/// # Examples
///
/// ```
/// use checked_rail::Checked;
///
/// let all: Checked<Vec<i32>, &str> =
///     vec![Checked::success(1), Checked::success(2)].into_iter().collect();
/// assert_eq!(all, Checked::Ok(vec![1, 2]));
///
/// let first_bad: Checked<Vec<i32>, &str> =
///     vec![Checked::success(1), Checked::failure("a"), Checked::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_bad, Checked::Err("a"));
/// ```
impl<A, E, V> FromIterator<Checked<A, E>> for Checked<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Checked<A, E>>,
    {
        let mut failure = None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Checked::Ok(value) => Some(value),
                Checked::Err(error) => {
                    failure = Some(error);
                    None
                },
            })
            .collect();

        match failure {
            Some(error) => Checked::Err(error),
            None => Checked::Ok(collected),
        }
    }
}
